//! Records passed between the agents.
//!
//! Every record is a value object: built once by the agent that owns the
//! step, then handed onward by value or reference and never mutated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::decision::{BUY_BIAS, HOLD, SELL_BIAS};

/// One OHLCV price observation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub content: String,
    pub source: String,
    pub url: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub summary: String,
    /// Which summarization method produced the text
    pub model_name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "POSITIVE",
            SentimentLabel::Negative => "NEGATIVE",
            SentimentLabel::Neutral => "NEUTRAL",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownLabel(pub String);

impl fmt::Display for UnknownLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sentiment label '{}'", self.0)
    }
}

impl std::error::Error for UnknownLabel {}

/// Case-insensitive; anything outside the three labels is rejected so the
/// decision engine never sees an unrecognized label.
impl FromStr for SentimentLabel {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "POSITIVE" => Ok(SentimentLabel::Positive),
            "NEGATIVE" => Ok(SentimentLabel::Negative),
            "NEUTRAL" => Ok(SentimentLabel::Neutral),
            _ => Err(UnknownLabel(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    /// Classifier confidence in [0, 1]
    pub score: f64,
    pub model_name: String,
}

/// The three fixed action phrases a recommendation can carry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    #[serde(rename = "CONSIDER INCREASING EXPOSURE (BUY BIAS)")]
    BuyBias,
    #[serde(rename = "CONSIDER REDUCING EXPOSURE (SELL BIAS)")]
    SellBias,
    #[serde(rename = "NO CLEAR SIGNAL (HOLD / NEUTRAL)")]
    Hold,
}

impl Action {
    pub fn phrase(&self) -> &'static str {
        match self {
            Action::BuyBias => BUY_BIAS,
            Action::SellBias => SELL_BIAS,
            Action::Hold => HOLD,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase())
    }
}

/// Toy investment suggestion. Educational only, never financial advice.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub recommendation: Action,
    pub confidence: f64,
    pub rationale: String,
}
