//! Custom error types for the news trading pipeline
//!
//! Only the I/O boundaries can fail. The text normalizer, the summarizer,
//! the label mapping and the decision engine are total.

use thiserror::Error;

/// Top-level pipeline errors
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Stock data error: {0}")]
    StockData(#[from] StockDataError),

    #[error("News error: {0}")]
    News(#[from] NewsError),

    #[error("Classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Market data errors
#[derive(Error, Debug)]
pub enum StockDataError {
    #[error("No data returned for symbol={symbol}, period={period}, interval={interval}")]
    NoData {
        symbol: String,
        period: String,
        interval: String,
    },

    #[error("Market data provider failed: {0}")]
    Provider(String),
}

/// Article acquisition errors
#[derive(Error, Debug)]
pub enum NewsError {
    #[error("Failed to fetch article from {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("Could not extract article content from {url}")]
    Extraction { url: String },
}

/// The external text classifier failed or answered with something unusable
#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("Classifier backend failed: {0}")]
    Backend(String),

    #[error("Unparseable classifier output: {0}")]
    InvalidOutput(String),
}

/// Chat model errors
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("OpenAI API error: {0}")]
    Api(#[from] async_openai::error::OpenAIError),

    #[error("LLM returned an empty response")]
    EmptyResponse,
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl From<LlmError> for ClassifierError {
    fn from(err: LlmError) -> Self {
        ClassifierError::Backend(err.to_string())
    }
}
