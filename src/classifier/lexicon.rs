use async_trait::async_trait;
use vader_sentiment::SentimentIntensityAnalyzer;

use super::{Classification, TextClassifier};
use crate::constants::sentiment::LEXICON_MODEL_NAME;
use crate::error::ClassifierError;

/// Financial jargon VADER's general lexicon misses
const FINANCIAL_KEYWORDS: &[(&str, f64)] = &[
    ("surge", 0.4),
    ("rally", 0.4),
    ("soar", 0.5),
    ("bullish", 0.5),
    ("record high", 0.4),
    ("beats expectations", 0.4),
    ("upgrade", 0.3),
    ("plunge", -0.5),
    ("crash", -0.5),
    ("bearish", -0.5),
    ("sell-off", -0.4),
    ("selloff", -0.4),
    ("downgrade", -0.3),
    ("lawsuit", -0.4),
    ("misses expectations", -0.4),
    ("bankruptcy", -0.6),
];

const KEYWORD_WEIGHT: f64 = 0.5;

/// Offline classifier: VADER compound score with a financial keyword boost,
/// reported the way a binary sentiment model would (label + probability).
pub struct LexiconClassifier {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl LexiconClassifier {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }

    fn financial_boost(text: &str) -> f64 {
        let lower = text.to_lowercase();
        FINANCIAL_KEYWORDS
            .iter()
            .filter(|(keyword, _)| lower.contains(*keyword))
            .map(|(_, score)| score)
            .sum()
    }

    /// Polarity in [-1, 1]
    pub fn polarity(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }
        let scores = self.analyzer.polarity_scores(text);
        let compound = scores.get("compound").copied().unwrap_or(0.0);
        (compound + Self::financial_boost(text) * KEYWORD_WEIGHT).clamp(-1.0, 1.0)
    }
}

impl Default for LexiconClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Polarity to (binary label, probability of that label)
pub fn polarity_to_classification(polarity: f64) -> Classification {
    let label = if polarity < 0.0 { "NEGATIVE" } else { "POSITIVE" };
    Classification {
        label: label.to_string(),
        score: 0.5 + polarity.abs().min(1.0) / 2.0,
    }
}

#[async_trait]
impl TextClassifier for LexiconClassifier {
    fn model_name(&self) -> &str {
        LEXICON_MODEL_NAME
    }

    async fn classify(&self, text: &str) -> Result<Classification, ClassifierError> {
        Ok(polarity_to_classification(self.polarity(text)))
    }
}
