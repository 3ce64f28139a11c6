use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::constants;
use crate::error::ConfigError;

pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct StockConfig {
    pub symbol: String,
    pub period: String,
    pub interval: String,
    pub lookback: usize,
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            symbol: constants::stock::DEFAULT_SYMBOL.to_string(),
            period: constants::stock::DEFAULT_PERIOD.to_string(),
            interval: constants::stock::DEFAULT_INTERVAL.to_string(),
            lookback: constants::stock::DEFAULT_LOOKBACK,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    pub source_name: String,
    pub manual_source_name: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            source_name: constants::news::DEFAULT_SOURCE_NAME.to_string(),
            manual_source_name: constants::news::MANUAL_SOURCE_NAME.to_string(),
            timeout_secs: constants::news::DEFAULT_TIMEOUT_SECS,
            user_agent: constants::news::DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryMethod {
    #[default]
    FirstN,
    Llm,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    pub max_sentences: usize,
    pub method: SummaryMethod,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_sentences: constants::summary::DEFAULT_MAX_SENTENCES,
            method: SummaryMethod::FirstN,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierKind {
    #[default]
    Lexicon,
    Llm,
}

/// Which text the sentiment scorer reads
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentTarget {
    #[default]
    Summary,
    Content,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SentimentConfig {
    pub neutral_margin: f64,
    pub max_chars: usize,
    pub classifier: ClassifierKind,
    pub analyze: SentimentTarget,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            neutral_margin: constants::sentiment::DEFAULT_NEUTRAL_MARGIN,
            max_chars: constants::sentiment::DEFAULT_MAX_CHARS,
            classifier: ClassifierKind::Lexicon,
            analyze: SentimentTarget::Summary,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct DecisionConfig {
    pub bullish_threshold: f64,
    pub bearish_threshold: f64,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            bullish_threshold: constants::decision::DEFAULT_BULLISH_THRESHOLD,
            bearish_threshold: constants::decision::DEFAULT_BEARISH_THRESHOLD,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: constants::llm::DEFAULT_MODEL.to_string(),
        }
    }
}

impl LlmConfig {
    /// Configured key, else `OPENAI_API_KEY` from the environment.
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var(constants::llm::API_KEY_ENV).ok())
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub stock: StockConfig,
    pub news: NewsConfig,
    pub summary: SummaryConfig,
    pub sentiment: SentimentConfig,
    pub decision: DecisionConfig,
    pub llm: LlmConfig,
}

impl AppConfig {
    /// Loads `config.yaml` from the working directory, or defaults if it is absent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_or_default(DEFAULT_CONFIG_PATH)
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            warn!("⚠️ {} not found, using default configuration", path.display());
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        // Strip BOM if present
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        // An empty document is valid and means "all defaults"
        let config: AppConfig = if content.trim().is_empty() {
            AppConfig::default()
        } else {
            serde_yaml::from_str(content)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let unit = |name: &str, v: f64| {
            if (0.0..=1.0).contains(&v) {
                Ok(())
            } else {
                Err(ConfigError::Invalid(format!("{} must be within [0, 1], got {}", name, v)))
            }
        };
        unit("decision.bullish_threshold", self.decision.bullish_threshold)?;
        unit("decision.bearish_threshold", self.decision.bearish_threshold)?;
        unit("sentiment.neutral_margin", self.sentiment.neutral_margin)?;

        if self.summary.max_sentences == 0 {
            return Err(ConfigError::Invalid("summary.max_sentences must be at least 1".into()));
        }
        if self.sentiment.max_chars == 0 {
            return Err(ConfigError::Invalid("sentiment.max_chars must be at least 1".into()));
        }
        if self.stock.symbol.trim().is_empty() {
            return Err(ConfigError::Invalid("stock.symbol must not be empty".into()));
        }
        Ok(())
    }
}
