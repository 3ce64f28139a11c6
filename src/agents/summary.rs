use std::sync::Arc;
use tracing::info;

use super::PromptAgent;
use crate::constants::summary::{DEFAULT_MAX_SENTENCES, FIRST_N_MODEL_NAME};
use crate::error::LlmError;
use crate::llm::ChatModel;
use crate::models::{Article, Summary};
use crate::text::normalize;

/// Extractive summarizer that keeps the article's leading sentences.
///
/// This is deliberately naive: sentences are whatever lies between periods,
/// so abbreviations and decimals split too. It is not a semantic summary.
#[derive(Clone, Debug)]
pub struct SummaryAgent {
    max_sentences: usize,
}

impl SummaryAgent {
    pub fn new(max_sentences: usize) -> Self {
        Self { max_sentences }
    }

    pub fn max_sentences(&self) -> usize {
        self.max_sentences
    }

    pub fn summarize_article(&self, article: &Article) -> Summary {
        info!(
            "📝 Summarizing article: '{}' from source '{}'",
            article.title, article.source
        );
        Summary {
            summary: first_sentences(&article.content, self.max_sentences),
            model_name: FIRST_N_MODEL_NAME.to_string(),
        }
    }
}

impl Default for SummaryAgent {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SENTENCES)
    }
}

/// First `max_sentences` period-delimited sentences of `text`, rejoined
/// with ". " and closed with a single period. Empty text gives "".
pub fn first_sentences(text: &str, max_sentences: usize) -> String {
    let cleaned = normalize(text);
    let sentences: Vec<&str> = cleaned
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    info!("📝 Article contains {} sentences", sentences.len());

    let selected = &sentences[..sentences.len().min(max_sentences)];
    let mut summary = selected.join(". ");
    if selected.last().is_some_and(|s| !s.ends_with('.')) {
        summary.push('.');
    }
    summary
}

pub struct SummaryPrompt {
    max_sentences: usize,
    system_prompt: String,
}

impl SummaryPrompt {
    pub fn new(max_sentences: usize) -> Self {
        let system_prompt = format!(
            r#"You are a financial news summarizer.
Summarize the article you are given in at most {} sentences.
Keep the facts that matter to investors (companies, figures, guidance, market reaction).
Do not add opinions or facts that are not in the article.
Output ONLY the summary text, without headings or bullet points."#,
            max_sentences
        );
        Self {
            max_sentences,
            system_prompt,
        }
    }
}

impl PromptAgent for SummaryPrompt {
    fn name(&self) -> &str {
        "Summary-Agent"
    }

    fn system_prompt(&self) -> &str {
        &self.system_prompt
    }
}

/// Abstractive summarizer backed by a chat model.
pub struct LlmSummarizer {
    llm: Arc<dyn ChatModel>,
    prompt: SummaryPrompt,
}

impl LlmSummarizer {
    pub fn new(llm: Arc<dyn ChatModel>, max_sentences: usize) -> Self {
        Self {
            llm,
            prompt: SummaryPrompt::new(max_sentences),
        }
    }

    pub async fn summarize_article(&self, article: &Article) -> Result<Summary, LlmError> {
        info!(
            "📝 Summarizing article '{}' with {} (max {} sentences)",
            article.title,
            self.llm.model_name(),
            self.prompt.max_sentences
        );
        let query = format!("Title: {}\n\n{}", article.title, article.content);
        let response = self.prompt.run(&query, self.llm.as_ref()).await?;

        Ok(Summary {
            summary: normalize(&response),
            model_name: self.llm.model_name().to_string(),
        })
    }
}
