use clap::Parser;
use news_trading_demo::config::{AppConfig, DEFAULT_CONFIG_PATH};
use news_trading_demo::{ArticleSource, ManualArticle, Pipeline, PipelineReport, PipelineRequest};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Toy multi-agent news pipeline. Educational only, not investment advice.
#[derive(Parser, Debug)]
#[command(name = "news_trading_demo", version, about)]
struct Cli {
    /// Path to the YAML configuration
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Ticker symbol (overrides config)
    #[arg(long)]
    symbol: Option<String>,

    /// History period, e.g. 1y, 6mo, 5d (overrides config)
    #[arg(long)]
    period: Option<String>,

    /// Bar interval, e.g. 1d, 1h (overrides config)
    #[arg(long)]
    interval: Option<String>,

    /// Article URL to scrape
    #[arg(long)]
    url: Option<String>,

    /// Human-readable name of the news source
    #[arg(long)]
    source: Option<String>,

    /// Manual article title; with --url it becomes the fallback
    #[arg(long)]
    title: Option<String>,

    /// Manual article body
    #[arg(long, conflicts_with = "content_file")]
    content: Option<String>,

    /// Read the manual article body from a file
    #[arg(long)]
    content_file: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn manual_article(&self) -> Result<Option<ManualArticle>, Box<dyn std::error::Error + Send + Sync>> {
        let content = match (&self.content, &self.content_file) {
            (Some(text), _) => Some(text.clone()),
            (None, Some(path)) => Some(std::fs::read_to_string(path)?),
            (None, None) => None,
        };
        Ok(content.map(|content| ManualArticle {
            title: self.title.clone().unwrap_or_default(),
            content,
            source_name: if self.url.is_some() { None } else { self.source.clone() },
            published_at: None,
        }))
    }

    fn article_source(&self) -> Result<ArticleSource, Box<dyn std::error::Error + Send + Sync>> {
        let manual = self.manual_article()?;
        match (&self.url, manual) {
            (Some(url), fallback) => Ok(ArticleSource::Url {
                url: url.clone(),
                source_name: self.source.clone(),
                fallback,
            }),
            (None, Some(manual)) => Ok(ArticleSource::Manual(manual)),
            (None, None) => Err("provide --url or --content/--content-file".into()),
        }
    }
}

fn print_report(report: &PipelineReport) {
    println!("=== {} ===", report.symbol);
    match report.last_close {
        Some(close) => println!("Bars: {} (last close {:.2})", report.bars, close),
        None => println!("Bars: none"),
    }
    match report.recent_return {
        Some(r) => println!("Recent {}-bar return: {:.2}%", report.lookback, r * 100.0),
        None => println!("Recent {}-bar return: n/a", report.lookback),
    }
    println!();
    println!("Article: {} ({})", report.article.title, report.article.source);
    if let Some(url) = &report.article.url {
        println!("URL: {}", url);
    }
    if let Some(published) = report.article.published_at {
        println!("Published: {}", published.to_rfc3339());
    }
    println!();
    println!("Summary [{}]:", report.summary.model_name);
    println!("{}", report.summary.summary);
    println!();
    println!(
        "Sentiment [{}]: {} ({:.3})",
        report.sentiment.model_name, report.sentiment.label, report.sentiment.score
    );
    println!();
    println!("Recommendation: {}", report.recommendation.recommendation);
    println!("Confidence: {:.2}", report.recommendation.confidence);
    println!("Rationale: {}", report.recommendation.rationale);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();

    // Setup Logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting news trading demo...");

    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)?;
    if let Some(symbol) = &cli.symbol {
        config.stock.symbol = symbol.clone();
    }
    if let Some(period) = &cli.period {
        config.stock.period = period.clone();
    }
    if let Some(interval) = &cli.interval {
        config.stock.interval = interval.clone();
    }
    info!("Loaded Configuration: {:?}", config.stock);

    let request = PipelineRequest::from_config(&config, cli.article_source()?);
    let pipeline = Pipeline::from_config(&config)?;
    let report = pipeline.run(&request).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}
