//! Unit tests for the sentiment agent and its label mapping.

#[cfg(test)]
mod sentiment_tests {
    use crate::agents::sentiment::*;
    use crate::classifier::{Classification, TextClassifier};
    use crate::error::ClassifierError;
    use crate::models::SentimentLabel;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Returns a fixed answer and remembers what it was asked
    struct FakeClassifier {
        label: &'static str,
        score: f64,
        seen: Mutex<Vec<String>>,
    }

    impl FakeClassifier {
        fn new(label: &'static str, score: f64) -> Arc<Self> {
            Arc::new(Self {
                label,
                score,
                seen: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<String> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextClassifier for FakeClassifier {
        fn model_name(&self) -> &str {
            "fake-sst2"
        }

        async fn classify(&self, text: &str) -> Result<Classification, ClassifierError> {
            self.seen.lock().unwrap().push(text.to_string());
            Ok(Classification {
                label: self.label.to_string(),
                score: self.score,
            })
        }
    }

    struct BrokenClassifier;

    #[async_trait]
    impl TextClassifier for BrokenClassifier {
        fn model_name(&self) -> &str {
            "broken"
        }

        async fn classify(&self, _text: &str) -> Result<Classification, ClassifierError> {
            Err(ClassifierError::Backend("model offline".to_string()))
        }
    }

    // ============= map_label Tests =============

    #[test]
    fn test_near_boundary_is_neutral_for_either_label() {
        assert_eq!(map_label("POSITIVE", 0.55, 0.1), SentimentLabel::Neutral);
        assert_eq!(map_label("NEGATIVE", 0.55, 0.1), SentimentLabel::Neutral);
        assert_eq!(map_label("NEGATIVE", 0.45, 0.1), SentimentLabel::Neutral);
    }

    #[test]
    fn test_margin_is_inclusive() {
        assert_eq!(map_label("POSITIVE", 0.6, 0.1), SentimentLabel::Neutral);
        assert_eq!(map_label("NEGATIVE", 0.4, 0.1), SentimentLabel::Neutral);
    }

    #[test]
    fn test_just_outside_margin() {
        assert_eq!(map_label("POSITIVE", 0.61, 0.1), SentimentLabel::Positive);
        assert_eq!(map_label("NEGATIVE", 0.61, 0.1), SentimentLabel::Negative);
        assert_eq!(map_label("NEGATIVE", 0.39, 0.1), SentimentLabel::Negative);
    }

    #[test]
    fn test_confident_labels() {
        assert_eq!(map_label("NEGATIVE", 0.9, 0.1), SentimentLabel::Negative);
        assert_eq!(map_label("POSITIVE", 0.9, 0.1), SentimentLabel::Positive);
        assert_eq!(map_label("neg", 0.9, 0.1), SentimentLabel::Negative);
        assert_eq!(map_label("LABEL_1", 0.9, 0.1), SentimentLabel::Positive);
    }

    #[test]
    fn test_zero_margin() {
        assert_eq!(map_label("POSITIVE", 0.5, 0.0), SentimentLabel::Neutral);
        assert_eq!(map_label("POSITIVE", 0.51, 0.0), SentimentLabel::Positive);
    }

    // ============= SentimentAgent Tests =============

    #[tokio::test]
    async fn test_empty_text_skips_classifier() {
        let fake = FakeClassifier::new("NEGATIVE", 0.99);
        let agent = SentimentAgent::with_defaults(fake.clone());
        let result = agent.analyze_text("  \n\t ").await.unwrap();

        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.model_name, "fake-sst2");
        assert!(fake.calls().is_empty());
    }

    #[tokio::test]
    async fn test_input_truncated_and_normalized() {
        let fake = FakeClassifier::new("POSITIVE", 0.9);
        let agent = SentimentAgent::new(fake.clone(), 0.1, 10);
        let result = agent.analyze_text("  abcde   fghij klmno ").await.unwrap();

        assert_eq!(fake.calls(), vec!["abcde fghi".to_string()]);
        assert_eq!(result.label, SentimentLabel::Positive);
        assert_eq!(result.score, 0.9);
    }

    #[tokio::test]
    async fn test_default_cap_is_512_chars() {
        let fake = FakeClassifier::new("POSITIVE", 0.9);
        let agent = SentimentAgent::with_defaults(fake.clone());
        agent.analyze_text(&"x".repeat(2_000)).await.unwrap();

        assert_eq!(fake.calls()[0].chars().count(), 512);
    }

    #[tokio::test]
    async fn test_uncertain_negative_overridden() {
        let agent = SentimentAgent::with_defaults(FakeClassifier::new("NEGATIVE", 0.55));
        let result = agent.analyze_text("Markets were mixed.").await.unwrap();

        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.score, 0.55);
    }

    #[tokio::test]
    async fn test_classifier_error_surfaces() {
        let agent = SentimentAgent::with_defaults(Arc::new(BrokenClassifier));
        let err = agent.analyze_text("Some text.").await.unwrap_err();
        assert!(matches!(err, ClassifierError::Backend(_)));
    }
}
