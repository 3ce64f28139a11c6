use chrono::{DateTime, Utc};
use scraper::{Html, Selector};

use super::traits::{ExtractedPage, HtmlExtractor};
use crate::text::normalize;

/// Title candidates, tried in order
const TITLE_SELECTORS: &[&str] = &["title", "h1"];
const OG_TITLE_SELECTOR: &str = r#"meta[property="og:title"]"#;
const PARAGRAPH_SELECTOR: &str = "p";
const PUBLISHED_SELECTORS: &[&str] = &[
    r#"meta[property="article:published_time"]"#,
    r#"meta[name="pubdate"]"#,
    r#"meta[itemprop="datePublished"]"#,
];

/// Naive extractor: title from `<title>`/`<h1>`/`og:title`, body from every `<p>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlPageExtractor;

impl HtmlPageExtractor {
    pub fn new() -> Self {
        Self
    }

    fn title(doc: &Html) -> Option<String> {
        let from_elements = TITLE_SELECTORS.iter().find_map(|css| {
            let selector = Selector::parse(css).ok()?;
            doc.select(&selector)
                .map(|el| normalize(&el.text().collect::<String>()))
                .find(|t| !t.is_empty())
        });

        from_elements.or_else(|| Self::meta_content(doc, OG_TITLE_SELECTOR))
    }

    fn meta_content(doc: &Html, css: &str) -> Option<String> {
        let selector = Selector::parse(css).ok()?;
        doc.select(&selector)
            .filter_map(|el| el.value().attr("content"))
            .map(normalize)
            .find(|c| !c.is_empty())
    }

    fn published_at(doc: &Html) -> Option<DateTime<Utc>> {
        PUBLISHED_SELECTORS.iter().find_map(|css| {
            let raw = Self::meta_content(doc, css)?;
            DateTime::parse_from_rfc3339(&raw)
                .ok()
                .map(|dt| dt.with_timezone(&Utc))
        })
    }
}

impl HtmlExtractor for HtmlPageExtractor {
    fn extract(&self, document: &str) -> ExtractedPage {
        let doc = Html::parse_document(document);

        let paragraphs = match Selector::parse(PARAGRAPH_SELECTOR) {
            Ok(selector) => doc
                .select(&selector)
                .map(|p| p.text().collect::<String>())
                .collect(),
            Err(_) => Vec::new(),
        };

        ExtractedPage {
            title: Self::title(&doc),
            paragraphs,
            published_at: Self::published_at(&doc),
        }
    }
}
