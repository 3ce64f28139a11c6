use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::NewsError;

/// What an extractor pulls out of a raw HTML document
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExtractedPage {
    /// First non-empty title candidate, if any
    pub title: Option<String>,
    /// Raw text of every paragraph-level block, in document order
    pub paragraphs: Vec<String>,
    pub published_at: Option<DateTime<Utc>>,
}

#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    /// Raw document body. Transport failures and non-2xx statuses are `NewsError::Fetch`.
    async fn fetch(&self, url: &str) -> Result<String, NewsError>;
}

pub trait HtmlExtractor: Send + Sync {
    fn extract(&self, document: &str) -> ExtractedPage;
}
