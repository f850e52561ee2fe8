//! Test Fixtures
//!
//! Canned quotes, raw model replies, and generator helpers shared across
//! test modules. The raw replies mirror the shapes the live model actually
//! produces: clean JSON, fenced JSON, JSON wrapped in prose, and prose with
//! no JSON at all.

use fake::faker::lorem::en::Sentence;
use fake::Fake;

use crate::core::fallback::FallbackGenerator;

// =============================================================================
// Quote Fixtures
// =============================================================================

pub const POSITIVE_QUOTE: &str = "I love this beautiful sunny day, what a wonderful success!";
pub const NEGATIVE_QUOTE: &str = "Everything is terrible and this sad failure hurts.";
pub const NEUTRAL_QUOTE: &str = "The meeting is scheduled for Tuesday afternoon.";
pub const SHORT_QUOTE: &str = "Dream big.";

/// Random sentence for tests that only need some non-empty quote text.
pub fn random_quote() -> String {
    Sentence(3..10).fake()
}

/// Seeded generator so fallback output is reproducible inside a test.
pub fn seeded_generator() -> FallbackGenerator {
    FallbackGenerator::with_seed(42)
}

// =============================================================================
// Raw Model Replies
// =============================================================================

/// Clean sentiment JSON, exactly what a well-behaved reply looks like.
pub const SENTIMENT_RAW_JSON: &str = r#"{"sentiment":"positive","score":0.8,"emotions":{"joy":0.9,"sadness":0.1,"anger":0.05,"fear":0.05,"surprise":0.2}}"#;

/// The same payload inside a markdown code fence.
pub const SENTIMENT_RAW_FENCED: &str = "Here you go:\n```json\n{\"sentiment\":\"negative\",\"score\":-0.6,\"emotions\":{\"joy\":0.2,\"sadness\":0.8,\"anger\":0.4,\"fear\":0.3,\"surprise\":0.3}}\n```\nLet me know if you need more.";

/// Conversational reply with recoverable key-value fields but no JSON object.
pub const SENTIMENT_RAW_PROSE: &str =
    "Sure! The sentiment: \"negative\" here, with a score: -0.5 overall.";

/// Clean enhancement JSON in the wire shape (camelCase keys).
pub const ENHANCE_RAW_JSON: &str = r#"{"enhancedQuote":"Dream big, for dreams chart the course of greatness.","variations":["Let your dreams be vast.","Greatness begins as a dream.","Dare to dream beyond the horizon."],"insights":{"theme":"Ambition","tone":"Inspirational","styleAdvice":"Use bold serif typography on a dawn sky."}}"#;

/// Clean image-ideas JSON with two concepts.
pub const IDEAS_RAW_JSON: &str = r#"{"ideas":[{"description":"Sunrise over a mountain ridge","style":"Photography","prompt":"Golden sunrise over a misty mountain ridge, warm tones, wide angle."},{"description":"Lone sailboat on calm water","style":"Minimalist illustration","prompt":"Minimalist illustration of a lone sailboat on still water, muted palette."}]}"#;

/// Wrap raw reply text in the upstream API's response envelope, for mock
/// HTTP servers standing in for the real endpoint.
pub fn model_reply_body(raw: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {
                "parts": [{ "text": raw }]
            }
        }]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{EnhanceQuoteResult, ImageIdeasResult, SentimentAnalysis};

    #[test]
    fn test_random_quote_is_non_empty() {
        assert!(!random_quote().trim().is_empty());
    }

    #[test]
    fn test_canned_replies_deserialize() {
        let analysis: SentimentAnalysis = serde_json::from_str(SENTIMENT_RAW_JSON).unwrap();
        assert!(analysis.is_valid());

        let enhancement: EnhanceQuoteResult = serde_json::from_str(ENHANCE_RAW_JSON).unwrap();
        assert_eq!(enhancement.variations.len(), 3);

        let ideas: ImageIdeasResult = serde_json::from_str(IDEAS_RAW_JSON).unwrap();
        assert_eq!(ideas.ideas.len(), 2);
    }

    #[test]
    fn test_model_reply_body_shape() {
        let body = model_reply_body("hello");
        assert_eq!(body["candidates"][0]["content"]["parts"][0]["text"], "hello");
    }
}
