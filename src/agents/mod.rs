pub mod decision;
pub mod news;
pub mod sentiment;
pub mod stock;
pub mod summary;

use crate::error::LlmError;
use crate::llm::ChatModel;

use tracing::info;

pub use decision::DecisionAgent;
pub use news::NewsAgent;
pub use sentiment::SentimentAgent;
pub use stock::{PriceHistory, StockDataAgent};
pub use summary::{LlmSummarizer, SummaryAgent};

#[cfg(test)]
mod sentiment_tests;
#[cfg(test)]
mod summary_tests;

/// An agent whose behaviour is a system prompt sent to a chat model.
#[allow(async_fn_in_trait)]
pub trait PromptAgent {
    fn name(&self) -> &str;
    fn system_prompt(&self) -> &str;

    async fn run(&self, query: &str, llm: &dyn ChatModel) -> Result<String, LlmError> {
        info!("🤖 [AGENT] Sending request to {}...", self.name());
        let response = llm.chat(self.system_prompt(), query).await?;
        info!("🤖 [AGENT] Response from {}: {}", self.name(), response);
        Ok(response)
    }
}
