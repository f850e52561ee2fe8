//! Two-stage extraction of typed results from untrusted model output.
//!
//! Stage 1 (structured): find the first balanced `{...}` span in the raw
//! text and decode it against the target schema with strict field and type
//! requirements. A fenced ```json block, when present, is tried first.
//!
//! Stage 2 (tolerant scan, only on Stage-1 failure): recover individual
//! fields with a small key-value scanner. Grammar per field:
//!
//! ```text
//! lookup    = key , [quote] , ws* , ":" , ws* , value
//! key       = the exact field name, not preceded by a word character
//! value     = quoted  -> chars up to the next unescaped matching quote
//!           | array   -> balanced "[...]" span after the colon
//!           | object  -> balanced "{...}" span after the colon
//!           | bare    -> chars up to the next top-level delimiter
//! delimiter = '"' | ',' | '}' | ']' | newline
//! ```
//!
//! Any field the scan cannot recover is filled from the fallback result, so
//! the caller always receives a fully populated, schema-valid value. The only
//! signal out of this module is whether Stage 1 succeeded.

use crate::core::types::{
    EmotionScores, EnhanceQuoteResult, ImageIdea, ImageIdeasResult, Sentiment, SentimentAnalysis,
};

/// A parse result plus the observability flag for how it was obtained.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome<T> {
    pub value: T,
    /// True when Stage 1 (structured decode) produced the value.
    pub structured: bool,
}

// ============================================================================
// Stage 1: balanced-span extraction
// ============================================================================

/// Extract the first JSON object embedded in free-form text.
///
/// Tries a fenced ```json block first, then every `{` position in order,
/// taking the balanced span (brace depth tracked with string and escape
/// state) and decoding it. Returns the first span that parses.
pub fn extract_json_block(raw: &str) -> Option<serde_json::Value> {
    if let Some(start) = raw.find("```json") {
        if let Some(end) = raw[start + 7..].find("```") {
            let json_str = raw[start + 7..start + 7 + end].trim();
            if let Ok(value) = serde_json::from_str::<serde_json::Value>(json_str) {
                return Some(value);
            }
        }
    }

    for (idx, _) in raw.match_indices('{') {
        if let Some(span) = balanced_span(&raw[idx..], '{', '}') {
            if let Ok(value) = serde_json::from_str::<serde_json::Value>(span) {
                return Some(value);
            }
        }
    }

    None
}

/// Balanced `open...close` span at the start of `text`, respecting strings.
fn balanced_span(text: &str, open: char, close: char) -> Option<&str> {
    if !text.starts_with(open) {
        return None;
    }

    let mut depth = 0i32;
    let mut in_string = false;
    let mut escaped = false;

    for (i, ch) in text.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth -= 1;
                if depth == 0 {
                    // close is ASCII, so i + 1 lands on a char boundary
                    return Some(&text[..i + 1]);
                }
            }
            _ => {}
        }
    }

    None
}

// ============================================================================
// Stage 2: tolerant key-value scanner
// ============================================================================

/// Byte offset of the value belonging to `key`, per the module grammar.
fn locate_value_start(raw: &str, key: &str) -> Option<usize> {
    let bytes = raw.as_bytes();

    for (idx, _) in raw.match_indices(key) {
        // Reject matches inside longer identifiers
        if let Some(prev) = raw[..idx].chars().next_back() {
            if prev.is_alphanumeric() || prev == '_' {
                continue;
            }
        }

        let mut pos = idx + key.len();
        if pos < bytes.len() && (bytes[pos] == b'"' || bytes[pos] == b'\'') {
            pos += 1;
        }
        while pos < bytes.len() && (bytes[pos] == b' ' || bytes[pos] == b'\t') {
            pos += 1;
        }
        if pos >= bytes.len() || bytes[pos] != b':' {
            continue;
        }
        pos += 1;
        while pos < bytes.len() && (bytes[pos] == b' ' || bytes[pos] == b'\t') {
            pos += 1;
        }
        if pos < bytes.len() {
            return Some(pos);
        }
    }

    None
}

/// Recover a string value for `key`. Quoted values run to the matching
/// unescaped quote; bare values run to the next top-level delimiter. Blank
/// recoveries count as misses.
pub fn scan_string_field(raw: &str, key: &str) -> Option<String> {
    let start = locate_value_start(raw, key)?;
    let tail = &raw[start..];
    let mut chars = tail.chars();

    match chars.next() {
        Some(quote @ ('"' | '\'')) => {
            let mut out = String::new();
            let mut escaped = false;
            for c in chars {
                if escaped {
                    out.push(c);
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == quote {
                    return if out.trim().is_empty() { None } else { Some(out) };
                } else {
                    out.push(c);
                }
            }
            None
        }
        Some(_) => {
            let end = tail
                .find(['"', ',', '}', ']', '\n'])
                .unwrap_or(tail.len());
            let value = tail[..end].trim();
            if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            }
        }
        None => None,
    }
}

/// Recover a numeric value for `key`, tolerating quoted numbers.
pub fn scan_number_field(raw: &str, key: &str) -> Option<f64> {
    let start = locate_value_start(raw, key)?;
    let tail = raw[start..].trim_start_matches(['"', '\'']);
    let end = tail
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E')))
        .unwrap_or(tail.len());
    tail[..end].parse::<f64>().ok()
}

/// Recover an array of strings for `key` from its balanced bracket span.
/// An explicitly empty array is a successful (empty) recovery.
pub fn scan_string_array(raw: &str, key: &str) -> Option<Vec<String>> {
    let start = locate_value_start(raw, key)?;
    let span = balanced_span(&raw[start..], '[', ']')?;

    let mut items = Vec::new();
    let mut current = String::new();
    let mut in_string = false;
    let mut escaped = false;

    for c in span.chars() {
        if in_string {
            if escaped {
                current.push(c);
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
                if !current.trim().is_empty() {
                    items.push(std::mem::take(&mut current));
                } else {
                    current.clear();
                }
            } else {
                current.push(c);
            }
        } else if c == '"' {
            in_string = true;
        }
    }

    Some(items)
}

/// Balanced object span belonging to `key`, used to scope nested lookups.
fn scan_object_span<'a>(raw: &'a str, key: &str) -> Option<&'a str> {
    let start = locate_value_start(raw, key)?;
    balanced_span(&raw[start..], '{', '}')
}

/// Score standing in for a recovered label when no score was recovered,
/// chosen to satisfy the label thresholds.
fn representative_score(sentiment: Sentiment) -> f64 {
    match sentiment {
        Sentiment::Positive => 0.5,
        Sentiment::Negative => -0.5,
        Sentiment::Neutral => 0.0,
    }
}

// ============================================================================
// Per-feature parsers
// ============================================================================

/// Parse sentiment analysis out of raw model text.
pub fn parse_sentiment(raw: &str, fallback: SentimentAnalysis) -> ParseOutcome<SentimentAnalysis> {
    if let Some(value) = extract_json_block(raw) {
        if let Ok(decoded) = serde_json::from_value::<SentimentAnalysis>(value) {
            return ParseOutcome {
                value: decoded.normalized(),
                structured: true,
            };
        }
    }

    let recovered_label = scan_string_field(raw, "sentiment").and_then(|s| {
        match s.trim().to_lowercase().as_str() {
            "positive" => Some(Sentiment::Positive),
            "negative" => Some(Sentiment::Negative),
            "neutral" => Some(Sentiment::Neutral),
            _ => None,
        }
    });
    let recovered_score = scan_number_field(raw, "score");

    let score = recovered_score.unwrap_or_else(|| match recovered_label {
        Some(label) => representative_score(label),
        None => fallback.score,
    });

    let scope = scan_object_span(raw, "emotions").unwrap_or(raw);
    let emotions = EmotionScores {
        joy: scan_number_field(scope, "joy").unwrap_or(fallback.emotions.joy),
        sadness: scan_number_field(scope, "sadness").unwrap_or(fallback.emotions.sadness),
        anger: scan_number_field(scope, "anger").unwrap_or(fallback.emotions.anger),
        fear: scan_number_field(scope, "fear").unwrap_or(fallback.emotions.fear),
        surprise: scan_number_field(scope, "surprise").unwrap_or(fallback.emotions.surprise),
    };

    ParseOutcome {
        value: SentimentAnalysis {
            sentiment: Sentiment::Neutral,
            score,
            emotions,
        }
        .normalized(),
        structured: false,
    }
}

/// Parse a quote enhancement out of raw model text.
pub fn parse_enhancement(
    raw: &str,
    original: &str,
    fallback: EnhanceQuoteResult,
) -> ParseOutcome<EnhanceQuoteResult> {
    if let Some(value) = extract_json_block(raw) {
        if let Ok(decoded) = serde_json::from_value::<EnhanceQuoteResult>(value) {
            return ParseOutcome {
                value: decoded.normalized(original),
                structured: true,
            };
        }
    }

    let mut insights = fallback.insights;
    if let Some(theme) = scan_string_field(raw, "theme") {
        insights.theme = theme;
    }
    if let Some(tone) = scan_string_field(raw, "tone") {
        insights.tone = tone;
    }
    if let Some(advice) = scan_string_field(raw, "styleAdvice") {
        insights.style_advice = advice;
    }

    let value = EnhanceQuoteResult {
        enhanced_quote: scan_string_field(raw, "enhancedQuote")
            .unwrap_or(fallback.enhanced_quote),
        variations: scan_string_array(raw, "variations").unwrap_or(fallback.variations),
        insights,
    };

    ParseOutcome {
        value: value.normalized(original),
        structured: false,
    }
}

/// Idea objects inside the balanced array span for `key`. Only objects with
/// all three fields recovered are kept.
fn scan_idea_objects(raw: &str, key: &str) -> Option<Vec<ImageIdea>> {
    let start = locate_value_start(raw, key)?;
    let span = balanced_span(&raw[start..], '[', ']')?;

    let mut ideas = Vec::new();
    let mut rest = span;
    while let Some(obj_start) = rest.find('{') {
        let Some(obj) = balanced_span(&rest[obj_start..], '{', '}') else {
            break;
        };
        let description = scan_string_field(obj, "description");
        let style = scan_string_field(obj, "style");
        let prompt = scan_string_field(obj, "prompt");
        if let (Some(description), Some(style), Some(prompt)) = (description, style, prompt) {
            ideas.push(ImageIdea {
                description,
                style,
                prompt,
            });
        }
        rest = &rest[obj_start + obj.len()..];
    }

    if ideas.is_empty() {
        None
    } else {
        Some(ideas)
    }
}

/// Parse image ideas out of raw model text.
pub fn parse_image_ideas(
    raw: &str,
    fallback: ImageIdeasResult,
) -> ParseOutcome<ImageIdeasResult> {
    if let Some(value) = extract_json_block(raw) {
        if let Ok(decoded) = serde_json::from_value::<ImageIdeasResult>(value) {
            if !decoded.ideas.is_empty() {
                return ParseOutcome {
                    value: decoded.normalized(),
                    structured: true,
                };
            }
        }
    }

    let ideas = scan_idea_objects(raw, "ideas").unwrap_or(fallback.ideas);

    ParseOutcome {
        value: ImageIdeasResult { ideas }.normalized(),
        structured: false,
    }
}

// ============================================================================
// Tests
// ============================================================================
