//! Text classifiers: black boxes that return a raw binary label and a
//! confidence. Mapping that onto POSITIVE/NEGATIVE/NEUTRAL is the
//! sentiment agent's job, not theirs.

pub mod lexicon;
pub mod llm;

use async_trait::async_trait;

use crate::error::ClassifierError;

pub use lexicon::LexiconClassifier;
pub use llm::LlmClassifier;

/// Raw classifier output
#[derive(Clone, Debug, PartialEq)]
pub struct Classification {
    pub label: String,
    pub score: f64,
}

#[async_trait]
pub trait TextClassifier: Send + Sync {
    fn model_name(&self) -> &str;
    async fn classify(&self, text: &str) -> Result<Classification, ClassifierError>;
}
