use std::sync::Arc;
use tracing::{info, warn};

use crate::classifier::TextClassifier;
use crate::constants::sentiment::{DECISION_BOUNDARY, DEFAULT_MAX_CHARS, DEFAULT_NEUTRAL_MARGIN};
use crate::error::ClassifierError;
use crate::models::{SentimentLabel, SentimentResult};
use crate::text::{normalize, truncate_chars};

/// Maps a binary classifier's raw output onto POSITIVE/NEGATIVE/NEUTRAL.
///
/// A score within `neutral_margin` of 0.5 (inclusive) is NEUTRAL whatever
/// the raw label says. Otherwise a raw label containing "NEG" is NEGATIVE
/// and anything else is POSITIVE.
pub fn map_label(raw_label: &str, score: f64, neutral_margin: f64) -> SentimentLabel {
    if (score - DECISION_BOUNDARY).abs() <= neutral_margin {
        SentimentLabel::Neutral
    } else if raw_label.to_uppercase().contains("NEG") {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Positive
    }
}

pub struct SentimentAgent {
    classifier: Arc<dyn TextClassifier>,
    neutral_margin: f64,
    max_chars: usize,
}

impl SentimentAgent {
    pub fn new(classifier: Arc<dyn TextClassifier>, neutral_margin: f64, max_chars: usize) -> Self {
        Self {
            classifier,
            neutral_margin,
            max_chars,
        }
    }

    pub fn with_defaults(classifier: Arc<dyn TextClassifier>) -> Self {
        Self::new(classifier, DEFAULT_NEUTRAL_MARGIN, DEFAULT_MAX_CHARS)
    }

    pub fn neutral_margin(&self) -> f64 {
        self.neutral_margin
    }

    pub fn model_name(&self) -> &str {
        self.classifier.model_name()
    }

    /// Empty text short-circuits to NEUTRAL/0.0 without touching the classifier.
    pub async fn analyze_text(&self, text: &str) -> Result<SentimentResult, ClassifierError> {
        let cleaned = normalize(text);
        if cleaned.is_empty() {
            warn!("⚠️ Empty text provided to SentimentAgent");
            return Ok(SentimentResult {
                label: SentimentLabel::Neutral,
                score: 0.0,
                model_name: self.model_name().to_string(),
            });
        }

        info!(
            "🧠 Running sentiment analysis on text of length {}",
            cleaned.chars().count()
        );
        let raw = self
            .classifier
            .classify(truncate_chars(&cleaned, self.max_chars))
            .await?;

        let label = map_label(&raw.label, raw.score, self.neutral_margin);
        info!("🧠 Sentiment result: label={}, score={:.3}", label, raw.score);

        Ok(SentimentResult {
            label,
            score: raw.score,
            model_name: self.model_name().to_string(),
        })
    }
}
