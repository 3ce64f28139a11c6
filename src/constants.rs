//! Application-wide constants and magic numbers
//!
//! Defaults for every tunable live here so the config layer and the agents
//! agree on them.

use std::time::Duration;

/// Market data defaults
pub mod stock {
    /// S&P 500 index
    pub const DEFAULT_SYMBOL: &str = "^GSPC";
    pub const DEFAULT_PERIOD: &str = "1y";
    pub const DEFAULT_INTERVAL: &str = "1d";

    /// Number of trailing bars used for the recent return
    pub const DEFAULT_LOOKBACK: usize = 5;
}

/// Article acquisition constants
pub mod news {
    use super::*;

    pub const DEFAULT_SOURCE_NAME: &str = "Unknown Source";
    pub const MANUAL_SOURCE_NAME: &str = "Manual Input";

    /// Used when neither `<title>` nor a heading carries any text
    pub const UNTITLED_ARTICLE: &str = "Untitled article";

    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

    pub const DEFAULT_USER_AGENT: &str = "news-trading-demo/0.1";
}

/// Summarizer constants
pub mod summary {
    pub const DEFAULT_MAX_SENTENCES: usize = 5;

    /// Provenance tag of the leading-sentences policy
    pub const FIRST_N_MODEL_NAME: &str = "simple-first-n-sentences";
}

/// Sentiment scorer constants
pub mod sentiment {
    /// The binary classifier's decision boundary
    pub const DECISION_BOUNDARY: f64 = 0.5;

    pub const DEFAULT_NEUTRAL_MARGIN: f64 = 0.1;

    /// Input cap in characters, bounds classifier cost
    pub const DEFAULT_MAX_CHARS: usize = 512;

    pub const LEXICON_MODEL_NAME: &str = "vader-lexicon-financial";
}

/// Decision engine constants
pub mod decision {
    pub const DEFAULT_BULLISH_THRESHOLD: f64 = 0.65;
    pub const DEFAULT_BEARISH_THRESHOLD: f64 = 0.65;

    /// Confidence assigned to the HOLD branch
    pub const HOLD_CONFIDENCE: f64 = 0.5;

    /// Bump applied when the recent return agrees with the bias
    pub const RETURN_CONFIDENCE_BOOST: f64 = 0.05;

    pub const BUY_BIAS: &str = "CONSIDER INCREASING EXPOSURE (BUY BIAS)";
    pub const SELL_BIAS: &str = "CONSIDER REDUCING EXPOSURE (SELL BIAS)";
    pub const HOLD: &str = "NO CLEAR SIGNAL (HOLD / NEUTRAL)";

    pub const BULLISH_RATIONALE: &str = "The sentiment on the article is strongly positive. \
        In this toy model, we interpret this as a bullish signal.";
    pub const BEARISH_RATIONALE: &str = "The sentiment on the article is strongly negative. \
        In this toy model, we interpret this as a bearish signal.";
    pub const MIXED_RATIONALE: &str = "The sentiment appears mixed or not confident enough \
        to infer a clear directional signal.";

    pub const DISCLAIMER: &str =
        "This is for educational purposes only and not real investment advice.";
}

/// LLM defaults
pub mod llm {
    pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
    pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
}
