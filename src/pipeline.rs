//! End-to-end run: price history, article, summary, sentiment, decision.
//!
//! Steps run strictly in sequence. A failed price fetch only removes the
//! recent-return signal; a failed article fetch falls back to manual input
//! when the request carries one and aborts the run otherwise.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

use crate::agents::{
    DecisionAgent, LlmSummarizer, NewsAgent, SentimentAgent, StockDataAgent, SummaryAgent,
};
use crate::classifier::{LexiconClassifier, LlmClassifier, TextClassifier};
use crate::config::{AppConfig, ClassifierKind, SentimentTarget, SummaryMethod};
use crate::data::YahooProvider;
use crate::error::PipelineError;
use crate::llm::{ChatModel, LLMClient};
use crate::models::{Article, Recommendation, SentimentResult, Summary};
use crate::web::{HtmlPageExtractor, HttpFetcher};

#[derive(Clone, Debug)]
pub struct ManualArticle {
    pub title: String,
    pub content: String,
    pub source_name: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug)]
pub enum ArticleSource {
    Url {
        url: String,
        source_name: Option<String>,
        /// Used when the page cannot be fetched or has no body text
        fallback: Option<ManualArticle>,
    },
    Manual(ManualArticle),
}

#[derive(Clone, Debug)]
pub struct PipelineRequest {
    pub symbol: String,
    pub period: String,
    pub interval: String,
    pub lookback: usize,
    pub article: ArticleSource,
}

impl PipelineRequest {
    /// Market parameters from the `stock` section of the config.
    pub fn from_config(config: &AppConfig, article: ArticleSource) -> Self {
        Self {
            symbol: config.stock.symbol.clone(),
            period: config.stock.period.clone(),
            interval: config.stock.interval.clone(),
            lookback: config.stock.lookback,
            article,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct PipelineReport {
    pub symbol: String,
    pub bars: usize,
    pub last_close: Option<f64>,
    pub lookback: usize,
    pub recent_return: Option<f64>,
    pub article: Article,
    pub summary: Summary,
    pub sentiment: SentimentResult,
    pub recommendation: Recommendation,
}

pub struct Pipeline {
    stock: StockDataAgent,
    news: NewsAgent,
    summary: SummaryAgent,
    llm_summarizer: Option<LlmSummarizer>,
    sentiment: SentimentAgent,
    decision: DecisionAgent,
    sentiment_target: SentimentTarget,
    default_source_name: String,
    manual_source_name: String,
}

impl Pipeline {
    pub fn new(
        stock: StockDataAgent,
        news: NewsAgent,
        summary: SummaryAgent,
        sentiment: SentimentAgent,
        decision: DecisionAgent,
    ) -> Self {
        let defaults = crate::config::NewsConfig::default();
        Self {
            stock,
            news,
            summary,
            llm_summarizer: None,
            sentiment,
            decision,
            sentiment_target: SentimentTarget::default(),
            default_source_name: defaults.source_name,
            manual_source_name: defaults.manual_source_name,
        }
    }

    pub fn with_llm_summarizer(mut self, summarizer: LlmSummarizer) -> Self {
        self.llm_summarizer = Some(summarizer);
        self
    }

    pub fn with_sentiment_target(mut self, target: SentimentTarget) -> Self {
        self.sentiment_target = target;
        self
    }

    pub fn with_source_names(mut self, default_source: &str, manual_source: &str) -> Self {
        self.default_source_name = default_source.to_string();
        self.manual_source_name = manual_source.to_string();
        self
    }

    /// Wires the real collaborators: Yahoo prices, HTTP + HTML article
    /// scraping, and the configured classifier and summarizer.
    pub fn from_config(config: &AppConfig) -> Result<Self, PipelineError> {
        config.validate()?;

        let needs_llm = config.summary.method == SummaryMethod::Llm
            || config.sentiment.classifier == ClassifierKind::Llm;
        let llm: Option<Arc<dyn ChatModel>> = if needs_llm {
            info!("Using LLM Model: {}", config.llm.model);
            if config.llm.resolved_api_key().is_none() && config.llm.base_url.is_none() {
                warn!("⚠️ No LLM API key configured; LLM requests will likely be rejected");
            }
            Some(Arc::new(LLMClient::from_config(&config.llm)))
        } else {
            None
        };

        let classifier: Arc<dyn TextClassifier> = match (&config.sentiment.classifier, &llm) {
            (ClassifierKind::Llm, Some(llm)) => Arc::new(LlmClassifier::new(llm.clone())),
            _ => Arc::new(LexiconClassifier::new()),
        };

        let stock = StockDataAgent::new(Arc::new(YahooProvider::new()));
        let news = NewsAgent::new(
            Arc::new(HttpFetcher::from_config(&config.news)?),
            Arc::new(HtmlPageExtractor::new()),
        );
        let sentiment = SentimentAgent::new(
            classifier,
            config.sentiment.neutral_margin,
            config.sentiment.max_chars,
        );
        let decision = DecisionAgent::new(
            config.decision.bullish_threshold,
            config.decision.bearish_threshold,
        );

        let mut pipeline = Self::new(
            stock,
            news,
            SummaryAgent::new(config.summary.max_sentences),
            sentiment,
            decision,
        )
        .with_sentiment_target(config.sentiment.analyze)
        .with_source_names(&config.news.source_name, &config.news.manual_source_name);

        if let (SummaryMethod::Llm, Some(llm)) = (config.summary.method, llm) {
            pipeline = pipeline.with_llm_summarizer(LlmSummarizer::new(llm, config.summary.max_sentences));
        }
        Ok(pipeline)
    }

    pub async fn run(&self, request: &PipelineRequest) -> Result<PipelineReport, PipelineError> {
        info!("🚀 Running news pipeline for {}", request.symbol);

        let (bars, last_close, recent_return) = match self
            .stock
            .get_history(&request.symbol, &request.period, &request.interval)
            .await
        {
            Ok(history) => (history.len(), history.last_close(), history.recent_return(request.lookback)),
            Err(e) => {
                warn!("⚠️ Continuing without a recent-return signal: {}", e);
                (0, None, None)
            }
        };
        match recent_return {
            Some(r) => info!("📈 Recent {}-bar return: {:.4}", request.lookback, r),
            None => info!("📈 Not enough history for a {}-bar return", request.lookback),
        }

        let article = self.acquire_article(&request.article).await?;
        let summary = self.summarize(&article).await;

        let text = match self.sentiment_target {
            SentimentTarget::Summary => &summary.summary,
            SentimentTarget::Content => &article.content,
        };
        let sentiment = self.sentiment.analyze_text(text).await?;
        let recommendation = self.decision.make_recommendation(&sentiment, recent_return);

        Ok(PipelineReport {
            symbol: request.symbol.clone(),
            bars,
            last_close,
            lookback: request.lookback,
            recent_return,
            article,
            summary,
            sentiment,
            recommendation,
        })
    }

    async fn acquire_article(&self, source: &ArticleSource) -> Result<Article, PipelineError> {
        match source {
            ArticleSource::Manual(manual) => Ok(self.manual(manual)),
            ArticleSource::Url {
                url,
                source_name,
                fallback,
            } => {
                let source_name = source_name.as_deref().unwrap_or(&self.default_source_name);
                match self.news.fetch_article_from_url(url, source_name).await {
                    Ok(article) => Ok(article),
                    Err(e) => match fallback {
                        Some(manual) => {
                            warn!("⚠️ {}; falling back to manual article input", e);
                            Ok(self.manual(manual))
                        }
                        None => Err(e.into()),
                    },
                }
            }
        }
    }

    fn manual(&self, manual: &ManualArticle) -> Article {
        self.news.create_article_from_manual_input(
            &manual.title,
            &manual.content,
            manual.source_name.as_deref().unwrap_or(&self.manual_source_name),
            manual.published_at,
        )
    }

    /// LLM summary when configured, leading sentences otherwise or on failure.
    async fn summarize(&self, article: &Article) -> Summary {
        if let Some(llm) = &self.llm_summarizer {
            match llm.summarize_article(article).await {
                Ok(summary) if !summary.summary.is_empty() => return summary,
                Ok(_) => warn!("⚠️ LLM summary was empty, using leading sentences"),
                Err(e) => warn!("⚠️ LLM summary failed, using leading sentences: {}", e),
            }
        }
        self.summary.summarize_article(article)
    }
}
