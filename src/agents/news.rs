use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{error, info};

use crate::constants::news::UNTITLED_ARTICLE;
use crate::error::NewsError;
use crate::models::Article;
use crate::text::normalize;
use crate::web::{DocumentFetcher, HtmlExtractor};

/// Retrieves news articles, either scraped from a URL or pasted in by hand.
///
/// Scraping here is deliberately naive; a real system would use a proper
/// news API.
pub struct NewsAgent {
    fetcher: Arc<dyn DocumentFetcher>,
    extractor: Arc<dyn HtmlExtractor>,
}

impl NewsAgent {
    pub fn new(fetcher: Arc<dyn DocumentFetcher>, extractor: Arc<dyn HtmlExtractor>) -> Self {
        Self { fetcher, extractor }
    }

    pub async fn fetch_article_from_url(
        &self,
        url: &str,
        source_name: &str,
    ) -> Result<Article, NewsError> {
        info!("📰 Fetching article from URL: {}", url);

        let document = self.fetcher.fetch(url).await.inspect_err(|e| error!("❌ {}", e))?;
        let page = self.extractor.extract(&document);

        let title = page
            .title
            .as_deref()
            .map(normalize)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| UNTITLED_ARTICLE.to_string());

        let content = normalize(&page.paragraphs.join(" "));
        if content.is_empty() {
            let err = NewsError::Extraction { url: url.to_string() };
            error!("❌ {}", err);
            return Err(err);
        }

        info!("📰 Successfully parsed article: {}", title);

        Ok(Article {
            title,
            content,
            source: source_name.to_string(),
            url: Some(url.to_string()),
            published_at: page.published_at,
        })
    }

    /// Always succeeds; title and content are normalized.
    pub fn create_article_from_manual_input(
        &self,
        title: &str,
        content: &str,
        source_name: &str,
        published_at: Option<DateTime<Utc>>,
    ) -> Article {
        info!(
            "📰 Creating article from manual input, title='{}', source='{}'",
            title, source_name
        );
        manual_article(title, content, source_name, published_at)
    }
}

pub fn manual_article(
    title: &str,
    content: &str,
    source_name: &str,
    published_at: Option<DateTime<Utc>>,
) -> Article {
    Article {
        title: normalize(title),
        content: normalize(content),
        source: source_name.to_string(),
        url: None,
        published_at,
    }
}
