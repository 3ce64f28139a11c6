//! Unit tests for the summarizers.

#[cfg(test)]
mod summary_tests {
    use crate::agents::summary::*;
    use crate::error::LlmError;
    use crate::llm::ChatModel;
    use crate::models::Article;
    use async_trait::async_trait;
    use std::sync::Arc;

    fn article(content: &str) -> Article {
        Article {
            title: "Title".to_string(),
            content: content.to_string(),
            source: "Test".to_string(),
            url: None,
            published_at: None,
        }
    }

    // ============= first_sentences Tests =============

    #[test]
    fn test_takes_leading_sentences() {
        assert_eq!(first_sentences("A. B. C. D.", 2), "A. B.");
    }

    #[test]
    fn test_fewer_sentences_than_max() {
        assert_eq!(first_sentences("Alpha rose. Beta fell.", 5), "Alpha rose. Beta fell.");
    }

    #[test]
    fn test_missing_final_period_added() {
        assert_eq!(first_sentences("One. Two", 5), "One. Two.");
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(first_sentences("", 3), "");
        assert_eq!(first_sentences("  \n ", 3), "");
        assert_eq!(first_sentences("...", 3), "");
    }

    #[test]
    fn test_whitespace_normalized_before_split() {
        assert_eq!(first_sentences("  First\n\nline.   Second\tline. Third.", 2), "First line. Second line.");
    }

    // ============= SummaryAgent Tests =============

    #[test]
    fn test_summary_agent_provenance() {
        let agent = SummaryAgent::new(1);
        let summary = agent.summarize_article(&article("Shares jumped. Analysts cheered."));

        assert_eq!(summary.summary, "Shares jumped.");
        assert_eq!(summary.model_name, "simple-first-n-sentences");
    }

    #[test]
    fn test_summary_agent_default() {
        assert_eq!(SummaryAgent::default().max_sentences(), 5);
    }

    // ============= LlmSummarizer Tests =============

    struct EchoModel;

    #[async_trait]
    impl ChatModel for EchoModel {
        fn model_name(&self) -> &str {
            "echo-model"
        }

        async fn chat(&self, system_prompt: &str, user_input: &str) -> Result<String, LlmError> {
            assert!(system_prompt.contains("at most 2 sentences"));
            assert!(user_input.starts_with("Title: Title"));
            Ok("  Short\n summary. ".to_string())
        }
    }

    struct FailingModel;

    #[async_trait]
    impl ChatModel for FailingModel {
        fn model_name(&self) -> &str {
            "failing"
        }

        async fn chat(&self, _system: &str, _user: &str) -> Result<String, LlmError> {
            Err(LlmError::EmptyResponse)
        }
    }

    #[tokio::test]
    async fn test_llm_summarizer_uses_model() {
        let summarizer = LlmSummarizer::new(Arc::new(EchoModel), 2);
        let summary = summarizer.summarize_article(&article("Long body.")).await.unwrap();

        assert_eq!(summary.summary, "Short summary.");
        assert_eq!(summary.model_name, "echo-model");
    }

    #[tokio::test]
    async fn test_llm_summarizer_error_surfaces() {
        let summarizer = LlmSummarizer::new(Arc::new(FailingModel), 2);
        let err = summarizer.summarize_article(&article("Body.")).await.unwrap_err();
        assert!(matches!(err, LlmError::EmptyResponse));
    }
}
