//! Shared value objects for the content generation layer.
//!
//! Every result type here crosses the HTTP boundary as camelCase JSON and is
//! constructed fresh per request. Nothing in this module touches the network.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// ============================================================================
// Sentiment
// ============================================================================

/// Sentiment label, always derivable from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Label thresholds: `score > 0.3` positive, `score < -0.3` negative,
    /// neutral otherwise.
    pub fn from_score(score: f64) -> Self {
        if score > 0.3 {
            Sentiment::Positive
        } else if score < -0.3 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// Parse a caller-supplied label, treating anything unrecognized as neutral.
    pub fn from_label_or_neutral(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "positive" => Sentiment::Positive,
            "negative" => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-emotion intensity scores, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmotionScores {
    pub joy: f64,
    pub sadness: f64,
    pub anger: f64,
    pub fear: f64,
    pub surprise: f64,
}

impl EmotionScores {
    /// Clamp every component into `[0, 1]`.
    pub fn clamped(self) -> Self {
        Self {
            joy: self.joy.clamp(0.0, 1.0),
            sadness: self.sadness.clamp(0.0, 1.0),
            anger: self.anger.clamp(0.0, 1.0),
            fear: self.fear.clamp(0.0, 1.0),
            surprise: self.surprise.clamp(0.0, 1.0),
        }
    }

    pub fn all_in_range(&self) -> bool {
        [self.joy, self.sadness, self.anger, self.fear, self.surprise]
            .iter()
            .all(|v| (0.0..=1.0).contains(v))
    }
}

impl Default for EmotionScores {
    /// Flat distribution used when nothing better is known.
    fn default() -> Self {
        Self {
            joy: 0.2,
            sadness: 0.2,
            anger: 0.2,
            fear: 0.2,
            surprise: 0.2,
        }
    }
}

/// Full sentiment analysis result for a quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    pub sentiment: Sentiment,
    pub score: f64,
    pub emotions: EmotionScores,
}

impl SentimentAnalysis {
    /// Clamp score and emotions into range and recompute the label from the
    /// clamped score, restoring the label/score invariant.
    pub fn normalized(mut self) -> Self {
        self.score = self.score.clamp(-1.0, 1.0);
        self.emotions = self.emotions.clamped();
        self.sentiment = Sentiment::from_score(self.score);
        self
    }

    pub fn is_valid(&self) -> bool {
        (-1.0..=1.0).contains(&self.score)
            && self.emotions.all_in_range()
            && self.sentiment == Sentiment::from_score(self.score)
    }
}

// ============================================================================
// Quote Enhancement
// ============================================================================

/// Thematic insights accompanying an enhanced quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteInsights {
    pub theme: String,
    pub tone: String,
    pub style_advice: String,
}

/// Result of the quote enhancement feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceQuoteResult {
    pub enhanced_quote: String,
    pub variations: Vec<String>,
    pub insights: QuoteInsights,
}

impl EnhanceQuoteResult {
    /// Cap variations at three and substitute the original text if the
    /// enhanced quote came back blank.
    pub fn normalized(mut self, original: &str) -> Self {
        if self.enhanced_quote.trim().is_empty() {
            self.enhanced_quote = original.to_string();
        }
        self.variations.truncate(3);
        self
    }
}

// ============================================================================
// Image Ideas
// ============================================================================

/// One visual concept for a quote image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageIdea {
    pub description: String,
    pub style: String,
    pub prompt: String,
}

impl ImageIdea {
    pub fn new(
        description: impl Into<String>,
        style: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            style: style.into(),
            prompt: prompt.into(),
        }
    }
}

/// Result of the image-idea feature. Holds between 1 and 4 ideas on every
/// path, including fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageIdeasResult {
    pub ideas: Vec<ImageIdea>,
}

impl ImageIdeasResult {
    pub fn normalized(mut self) -> Self {
        self.ideas.truncate(4);
        self
    }
}

// ============================================================================
// Background Suggestions
// ============================================================================

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}){1,2}$").unwrap());

/// Category of a background suggestion; constrains the `value` syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    Color,
    Gradient,
    Image,
}

impl BackgroundKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackgroundKind::Color => "color",
            BackgroundKind::Gradient => "gradient",
            BackgroundKind::Image => "image",
        }
    }
}

/// A single background suggestion. `value` is a hex color, a CSS
/// `linear-gradient(...)`, or an absolute image URL depending on `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundSuggestion {
    #[serde(rename = "type")]
    pub kind: BackgroundKind,
    pub value: String,
    pub description: String,
}

impl BackgroundSuggestion {
    pub fn color(value: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: BackgroundKind::Color,
            value: value.into(),
            description: description.into(),
        }
    }

    pub fn gradient(value: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: BackgroundKind::Gradient,
            value: value.into(),
            description: description.into(),
        }
    }

    pub fn image(value: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: BackgroundKind::Image,
            value: value.into(),
            description: description.into(),
        }
    }

    /// True when the value syntax matches the declared kind.
    pub fn value_matches_kind(&self) -> bool {
        match self.kind {
            BackgroundKind::Color => HEX_COLOR.is_match(&self.value),
            BackgroundKind::Gradient => {
                self.value.starts_with("linear-gradient(") && self.value.ends_with(')')
            }
            BackgroundKind::Image => url::Url::parse(&self.value)
                .map(|u| u.scheme() == "http" || u.scheme() == "https")
                .unwrap_or(false),
        }
    }
}

/// Where background suggestions come from. Callers select explicitly; there
/// is no precedence between the remote providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundSource {
    #[default]
    Mock,
    Unsplash,
    Pexels,
}

impl BackgroundSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackgroundSource::Mock => "mock",
            BackgroundSource::Unsplash => "unsplash",
            BackgroundSource::Pexels => "pexels",
        }
    }
}

// ============================================================================
// Color Palettes
// ============================================================================

/// Five-slot palette applied by the editor UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

impl ColorPalette {
    /// Curated design presets offered alongside suggestions.
    pub fn presets() -> Vec<ColorPalette> {
        vec![
            ColorPalette {
                primary: "#3B82F6".to_string(),
                secondary: "#8B5CF6".to_string(),
                accent: "#F59E0B".to_string(),
                background: "#1E293B".to_string(),
                text: "#FFFFFF".to_string(),
            },
            ColorPalette {
                primary: "#10B981".to_string(),
                secondary: "#0EA5E9".to_string(),
                accent: "#F97316".to_string(),
                background: "#FFFFFF".to_string(),
                text: "#1F2937".to_string(),
            },
            ColorPalette {
                primary: "#EC4899".to_string(),
                secondary: "#8B5CF6".to_string(),
                accent: "#6366F1".to_string(),
                background: "#0F172A".to_string(),
                text: "#F8FAFC".to_string(),
            },
        ]
    }
}

// ============================================================================
// Tests
// ============================================================================
