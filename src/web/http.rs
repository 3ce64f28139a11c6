use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::info;
use url::Url;

use super::traits::DocumentFetcher;
use crate::config::NewsConfig;
use crate::constants;
use crate::error::NewsError;

#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, NewsError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| NewsError::Fetch {
                url: String::new(),
                reason: format!("failed to build HTTP client: {}", e),
            })?;
        Ok(Self { client })
    }

    pub fn from_config(config: &NewsConfig) -> Result<Self, NewsError> {
        Self::new(Duration::from_secs(config.timeout_secs), &config.user_agent)
    }

    pub fn with_defaults() -> Result<Self, NewsError> {
        Self::new(constants::news::DEFAULT_TIMEOUT, constants::news::DEFAULT_USER_AGENT)
    }
}

#[async_trait]
impl DocumentFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, NewsError> {
        let fetch_err = |reason: String| NewsError::Fetch {
            url: url.to_string(),
            reason,
        };

        let parsed = Url::parse(url).map_err(|e| fetch_err(format!("invalid URL: {}", e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(fetch_err(format!("unsupported scheme '{}'", parsed.scheme())));
        }

        let resp = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| fetch_err(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(fetch_err(format!("HTTP {}", status.as_u16())));
        }

        let body = resp.text().await.map_err(|e| fetch_err(e.to_string()))?;
        info!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
