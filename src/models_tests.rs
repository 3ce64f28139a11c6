//! Unit tests for the records passed between agents.

#[cfg(test)]
mod models_tests {
    use crate::models::*;

    // ============= SentimentLabel Tests =============

    #[test]
    fn test_label_parse_case_insensitive() {
        assert_eq!("positive".parse::<SentimentLabel>(), Ok(SentimentLabel::Positive));
        assert_eq!(" NEGATIVE ".parse::<SentimentLabel>(), Ok(SentimentLabel::Negative));
        assert_eq!("Neutral".parse::<SentimentLabel>(), Ok(SentimentLabel::Neutral));
    }

    #[test]
    fn test_label_parse_rejects_unknown() {
        let err = "BULLISH".parse::<SentimentLabel>().unwrap_err();
        assert_eq!(err, UnknownLabel("BULLISH".to_string()));
        assert!(err.to_string().contains("BULLISH"));
    }

    #[test]
    fn test_label_serde_uppercase() {
        let json = serde_json::to_string(&SentimentLabel::Negative).unwrap();
        assert_eq!(json, "\"NEGATIVE\"");

        let label: SentimentLabel = serde_json::from_str("\"NEUTRAL\"").unwrap();
        assert_eq!(label, SentimentLabel::Neutral);
    }

    // ============= Action Tests =============

    #[test]
    fn test_action_phrases() {
        assert_eq!(Action::BuyBias.phrase(), "CONSIDER INCREASING EXPOSURE (BUY BIAS)");
        assert_eq!(Action::SellBias.phrase(), "CONSIDER REDUCING EXPOSURE (SELL BIAS)");
        assert_eq!(Action::Hold.phrase(), "NO CLEAR SIGNAL (HOLD / NEUTRAL)");
        assert_eq!(Action::Hold.to_string(), Action::Hold.phrase());
    }

    #[test]
    fn test_recommendation_serializes_phrase() {
        let rec = Recommendation {
            recommendation: Action::SellBias,
            confidence: 0.7,
            rationale: "r".to_string(),
        };
        let value = serde_json::to_value(&rec).unwrap();

        assert_eq!(value["recommendation"], "CONSIDER REDUCING EXPOSURE (SELL BIAS)");
        assert_eq!(value["confidence"], 0.7);
    }

    // ============= Article Tests =============

    #[test]
    fn test_article_optional_fields_serialize_null() {
        let article = Article {
            title: "T".to_string(),
            content: "C".to_string(),
            source: "Manual Input".to_string(),
            url: None,
            published_at: None,
        };
        let value = serde_json::to_value(&article).unwrap();

        assert!(value["url"].is_null());
        assert!(value["published_at"].is_null());
    }
}
