//! Keyword extraction for background and image-idea customization.
//!
//! Pure string processing: lowercase tokenization on non-word boundaries,
//! stop-word filtering, order-preserving dedup, and sentiment-based padding
//! when a quote yields too few usable terms.

use crate::core::types::Sentiment;

/// Minimum token length kept by the extractors (strictly longer than 3).
const MIN_WORD_LEN: usize = 4;

/// Common words stripped before keywords are considered.
fn stop_words() -> Vec<&'static str> {
    vec![
        "that", "this", "with", "from", "they", "have", "what", "when", "were", "will", "would",
        "make", "like", "time", "just", "know", "take", "people", "year", "your", "good", "some",
        "could", "them", "about", "then", "than",
    ]
}

/// Filler words stripped by the lighter image-idea filter.
fn idea_filler_words() -> Vec<&'static str> {
    vec![
        "this", "that", "these", "those", "with", "from", "have", "were", "they",
    ]
}

/// Sentiment-specific search terms used to pad short keyword lists.
pub fn sentiment_keywords(sentiment: Sentiment) -> Vec<&'static str> {
    match sentiment {
        Sentiment::Positive => vec![
            "happy",
            "sunshine",
            "success",
            "inspiration",
            "motivation",
            "achievement",
        ],
        Sentiment::Negative => vec!["moody", "rain", "storm", "dark", "struggle", "challenge"],
        Sentiment::Neutral => vec!["calm", "balance", "minimal", "sky", "nature", "abstract"],
    }
}

/// Lowercase word tokens of at least `MIN_WORD_LEN` characters.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.len() >= MIN_WORD_LEN)
        .map(|w| w.to_string())
        .collect()
}

/// Extract search keywords from quote text.
///
/// Tokens pass the stop-word filter and are deduplicated in first-seen
/// order. When fewer than two survive, the first two sentiment keywords are
/// appended so downstream consumers always have something to search for.
pub fn extract_keywords(text: &str, sentiment: Sentiment) -> Vec<String> {
    let stops = stop_words();
    let mut keywords: Vec<String> = Vec::new();

    for word in tokenize(text) {
        if stops.contains(&word.as_str()) {
            continue;
        }
        if !keywords.contains(&word) {
            keywords.push(word);
        }
    }

    if keywords.len() < 2 {
        for word in sentiment_keywords(sentiment).into_iter().take(2) {
            keywords.push(word.to_string());
        }
    }

    keywords
}

/// Lighter filter used when picking a concept word for image ideas: drops
/// filler words but keeps everything else, duplicates included.
pub fn content_words(text: &str) -> Vec<String> {
    let fillers = idea_filler_words();
    tokenize(text)
        .into_iter()
        .filter(|w| !fillers.contains(&w.as_str()))
        .collect()
}
