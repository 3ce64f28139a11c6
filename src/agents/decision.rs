use tracing::info;

use crate::constants::decision::{
    BEARISH_RATIONALE, BULLISH_RATIONALE, DEFAULT_BEARISH_THRESHOLD, DEFAULT_BULLISH_THRESHOLD,
    DISCLAIMER, HOLD_CONFIDENCE, MIXED_RATIONALE, RETURN_CONFIDENCE_BOOST,
};
use crate::models::{Action, Recommendation, SentimentLabel, SentimentResult};

/// Turns a sentiment into a toy investment suggestion.
///
/// Intentionally simple and for teaching only. It must not be used for real
/// investment decisions.
///
/// Total over its inputs. Scores are not validated: threshold checks use the
/// raw score (NaN never passes one), and the BUY/SELL confidence is clamped
/// to [0, 1].
#[derive(Clone, Copy, Debug)]
pub struct DecisionAgent {
    bullish_threshold: f64,
    bearish_threshold: f64,
}

impl DecisionAgent {
    pub fn new(bullish_threshold: f64, bearish_threshold: f64) -> Self {
        Self {
            bullish_threshold,
            bearish_threshold,
        }
    }

    pub fn bullish_threshold(&self) -> f64 {
        self.bullish_threshold
    }

    pub fn bearish_threshold(&self) -> f64 {
        self.bearish_threshold
    }

    /// `recent_return` is a decimal: 0.02 is a 2% gain.
    pub fn make_recommendation(
        &self,
        sentiment: &SentimentResult,
        recent_return: Option<f64>,
    ) -> Recommendation {
        let score = sentiment.score;

        let (action, mut confidence, mut rationale) = match sentiment.label {
            SentimentLabel::Positive if score >= self.bullish_threshold => {
                (Action::BuyBias, clamp_unit(score), BULLISH_RATIONALE.to_string())
            }
            SentimentLabel::Negative if score >= self.bearish_threshold => {
                (Action::SellBias, clamp_unit(score), BEARISH_RATIONALE.to_string())
            }
            _ => (Action::Hold, HOLD_CONFIDENCE, MIXED_RATIONALE.to_string()),
        };

        match recent_return {
            Some(r) if r > 0.0 => {
                rationale.push_str(&format!(
                    " Recent returns are positive (approx. {:.2}%), which slightly reinforces bullish signals.",
                    r * 100.0
                ));
                if action == Action::BuyBias {
                    confidence = (confidence + RETURN_CONFIDENCE_BOOST).min(1.0);
                }
            }
            Some(r) if r < 0.0 => {
                rationale.push_str(&format!(
                    " Recent returns are negative (approx. {:.2}%), which slightly reinforces bearish signals.",
                    r * 100.0
                ));
                if action == Action::SellBias {
                    confidence = (confidence + RETURN_CONFIDENCE_BOOST).min(1.0);
                }
            }
            // Zero, NaN or absent
            _ => {}
        }

        rationale.push(' ');
        rationale.push_str(DISCLAIMER);

        info!("⚖️ Decision: {} (confidence={:.2})", action, confidence);

        Recommendation {
            recommendation: action,
            confidence,
            rationale,
        }
    }
}

impl Default for DecisionAgent {
    fn default() -> Self {
        Self::new(DEFAULT_BULLISH_THRESHOLD, DEFAULT_BEARISH_THRESHOLD)
    }
}

fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}
