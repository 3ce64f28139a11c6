use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

use super::{Classification, TextClassifier};
use crate::agents::PromptAgent;
use crate::error::ClassifierError;
use crate::llm::{strip_code_fence, ChatModel};

pub struct SentimentPrompt;

impl PromptAgent for SentimentPrompt {
    fn name(&self) -> &str {
        "Sentiment-Classifier"
    }

    fn system_prompt(&self) -> &str {
        r#"You are a binary sentiment classifier for financial news.
Classify the text as POSITIVE or NEGATIVE and give your confidence that the label is correct.
A confidence near 0.5 means you are unsure.

Output ONLY valid JSON. Do not include markdown formatting or chat text.
{
    "label": "POSITIVE" | "NEGATIVE",
    "score": 0.5 to 1.0
}
"#
    }
}

#[derive(Deserialize)]
struct RawClassification {
    label: String,
    score: f64,
}

/// Parses the classifier agent's JSON answer.
pub fn parse_classification(response: &str) -> Result<Classification, ClassifierError> {
    let body = strip_code_fence(response);
    let raw: RawClassification = serde_json::from_str(body)
        .map_err(|e| ClassifierError::InvalidOutput(format!("{}: {}", e, body)))?;

    if raw.label.trim().is_empty() {
        return Err(ClassifierError::InvalidOutput("empty label".to_string()));
    }
    if !raw.score.is_finite() || !(0.0..=1.0).contains(&raw.score) {
        return Err(ClassifierError::InvalidOutput(format!("score {} outside [0, 1]", raw.score)));
    }

    Ok(Classification {
        label: raw.label.trim().to_uppercase(),
        score: raw.score,
    })
}

/// Delegates classification to a chat model
pub struct LlmClassifier {
    llm: Arc<dyn ChatModel>,
}

impl LlmClassifier {
    pub fn new(llm: Arc<dyn ChatModel>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl TextClassifier for LlmClassifier {
    fn model_name(&self) -> &str {
        self.llm.model_name()
    }

    async fn classify(&self, text: &str) -> Result<Classification, ClassifierError> {
        let response = SentimentPrompt.run(text, self.llm.as_ref()).await?;
        parse_classification(&response)
    }
}
