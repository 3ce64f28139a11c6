//! News trading demo - a toy multi-agent pipeline
//!
//! Fetches price history, acquires a news article, summarizes it, scores its
//! sentiment and turns that into a canned recommendation. Built for teaching;
//! it must not be used for real investment decisions.

pub mod agents;
pub mod classifier;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod llm;
pub mod models;
pub mod pipeline;
pub mod text;
pub mod web;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::PipelineError;
pub use models::{Action, Article, Bar, Recommendation, SentimentLabel, SentimentResult, Summary};
pub use pipeline::{ArticleSource, ManualArticle, Pipeline, PipelineReport, PipelineRequest};

#[cfg(test)]
mod models_tests;
