//! Deterministic fallback content for every feature.
//!
//! Each generator mirrors the shape the model-backed path produces, so the
//! boundary can serve either one interchangeably. The only randomized points
//! (shuffle order, the surprise emotion, idea slot picks) draw from the
//! generator's own RNG, which can be seeded for reproducible output.

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::core::keywords;
use crate::core::types::{
    BackgroundSuggestion, EmotionScores, EnhanceQuoteResult, ImageIdea, ImageIdeasResult,
    QuoteInsights, Sentiment, SentimentAnalysis,
};

/// Suggestions returned by the sentiment-keyed background variant.
const SUGGESTION_COUNT: usize = 4;

/// Suggestions returned by the blended background variant.
const BLENDED_COUNT: usize = 8;

// ============================================================================
// Lexicons and curated tables
// ============================================================================

fn positive_words() -> Vec<&'static str> {
    vec![
        "good",
        "great",
        "excellent",
        "amazing",
        "wonderful",
        "happy",
        "joy",
        "love",
        "beautiful",
        "success",
    ]
}

fn negative_words() -> Vec<&'static str> {
    vec![
        "bad",
        "terrible",
        "awful",
        "horrible",
        "sad",
        "angry",
        "hate",
        "failure",
        "ugly",
        "worst",
    ]
}

fn default_ideas() -> Vec<ImageIdea> {
    vec![
        ImageIdea::new(
            "Abstract geometric shapes with gradient colors",
            "Minimalist, modern",
            "Abstract minimalist composition with geometric shapes in gradient colors, soft background, modern design, clean lines.",
        ),
        ImageIdea::new(
            "Silhouette of a person on a mountain at sunrise",
            "Photographic, inspirational",
            "Silhouette of a person standing on mountain peak at sunrise, golden light, inspiring view, panoramic landscape, hope and achievement.",
        ),
        ImageIdea::new(
            "Close-up of a natural element like water ripples or leaves",
            "Macro photography, serene",
            "Macro photography of water ripples with soft blue tones, serenity, tranquility, zen-like atmosphere, shallow depth of field.",
        ),
        ImageIdea::new(
            "Cosmic or galaxy background with stars and nebulae",
            "Space art, dramatic",
            "Deep space background with colorful nebula, distant stars, cosmic dust, deep purples and blues, universe expansion, awe-inspiring astronomy art.",
        ),
    ]
}

fn sentiment_backgrounds(sentiment: Sentiment) -> Vec<BackgroundSuggestion> {
    match sentiment {
        Sentiment::Positive => vec![
            BackgroundSuggestion::gradient(
                "linear-gradient(135deg, #4ade80 0%, #22d3ee 100%)",
                "Vibrant green to blue gradient",
            ),
            BackgroundSuggestion::gradient(
                "linear-gradient(135deg, #fde68a 0%, #f59e0b 100%)",
                "Warm sunny gradient",
            ),
            BackgroundSuggestion::color("#0ea5e9", "Bright sky blue"),
            BackgroundSuggestion::image(
                "https://images.unsplash.com/photo-1470071459604-3b5ec3a7fe05",
                "Scenic mountain landscape",
            ),
        ],
        Sentiment::Negative => vec![
            BackgroundSuggestion::gradient(
                "linear-gradient(135deg, #475569 0%, #0f172a 100%)",
                "Deep blue to dark gradient",
            ),
            BackgroundSuggestion::gradient(
                "linear-gradient(135deg, #6b7280 0%, #1f2937 100%)",
                "Subtle gray gradient",
            ),
            BackgroundSuggestion::color("#334155", "Slate gray"),
            BackgroundSuggestion::image(
                "https://images.unsplash.com/photo-1542273917363-3b1817f69a2d",
                "Misty forest",
            ),
        ],
        Sentiment::Neutral => vec![
            BackgroundSuggestion::gradient(
                "linear-gradient(135deg, #e2e8f0 0%, #cbd5e1 100%)",
                "Soft neutral gradient",
            ),
            BackgroundSuggestion::gradient(
                "linear-gradient(135deg, #f8fafc 0%, #e2e8f0 100%)",
                "Minimal light gradient",
            ),
            BackgroundSuggestion::color("#f1f5f9", "Clean white with subtle blue tint"),
            BackgroundSuggestion::image(
                "https://images.unsplash.com/photo-1557683316-973673baf926",
                "Calm water",
            ),
        ],
    }
}

/// Extra suggestions keyed on topic words in the quote itself.
fn topic_backgrounds(text: &str) -> Vec<BackgroundSuggestion> {
    let lower = text.to_lowercase();
    let mut extras = Vec::new();

    if lower.contains("love") || lower.contains("heart") {
        extras.push(BackgroundSuggestion::gradient(
            "linear-gradient(135deg, #fb7185 0%, #e11d48 100%)",
            "Romantic pink gradient",
        ));
    }
    if lower.contains("nature") || lower.contains("earth") || lower.contains("tree") {
        extras.push(BackgroundSuggestion::image(
            "https://images.unsplash.com/photo-1441974231531-c6227db76b6e",
            "Lush green forest",
        ));
    }
    if lower.contains("sky") || lower.contains("heaven") || lower.contains("cloud") {
        extras.push(BackgroundSuggestion::image(
            "https://images.unsplash.com/photo-1544829728-d6a8e4da3d2e",
            "Blue sky with clouds",
        ));
    }
    if lower.contains("ocean") || lower.contains("sea") || lower.contains("water") {
        extras.push(BackgroundSuggestion::image(
            "https://images.unsplash.com/photo-1505118380757-91f5f5632de0",
            "Ocean waves",
        ));
    }

    extras
}

fn solid_color_pool() -> Vec<BackgroundSuggestion> {
    vec![
        BackgroundSuggestion::color("#0ea5e9", "Bright sky blue"),
        BackgroundSuggestion::color("#334155", "Slate gray"),
        BackgroundSuggestion::color("#f1f5f9", "Clean white with subtle blue tint"),
        BackgroundSuggestion::color("#1E293B", "Deep navy"),
        BackgroundSuggestion::color("#10B981", "Emerald green"),
    ]
}

fn gradient_pool() -> Vec<BackgroundSuggestion> {
    vec![
        BackgroundSuggestion::gradient(
            "linear-gradient(135deg, #6366F1 0%, #8B5CF6 100%)",
            "Indigo to violet gradient",
        ),
        BackgroundSuggestion::gradient(
            "linear-gradient(135deg, #F59E0B 0%, #EF4444 100%)",
            "Amber to red gradient",
        ),
        BackgroundSuggestion::gradient(
            "linear-gradient(135deg, #10B981 0%, #3B82F6 100%)",
            "Emerald to blue gradient",
        ),
        BackgroundSuggestion::gradient(
            "linear-gradient(135deg, #EC4899 0%, #8B5CF6 100%)",
            "Pink to violet gradient",
        ),
        BackgroundSuggestion::gradient(
            "linear-gradient(135deg, #0EA5E9 0%, #8B5CF6 100%)",
            "Sky to violet gradient",
        ),
        BackgroundSuggestion::gradient(
            "linear-gradient(135deg, #fb7185 0%, #e11d48 100%)",
            "Romantic pink gradient",
        ),
    ]
}

fn image_pool() -> Vec<BackgroundSuggestion> {
    vec![
        BackgroundSuggestion::image(
            "https://images.unsplash.com/photo-1470071459604-3b5ec3a7fe05",
            "Scenic mountain landscape",
        ),
        BackgroundSuggestion::image(
            "https://images.unsplash.com/photo-1542273917363-3b1817f69a2d",
            "Misty forest",
        ),
        BackgroundSuggestion::image(
            "https://images.unsplash.com/photo-1557683316-973673baf926",
            "Calm water",
        ),
        BackgroundSuggestion::image(
            "https://images.unsplash.com/photo-1441974231531-c6227db76b6e",
            "Lush green forest",
        ),
        BackgroundSuggestion::image(
            "https://images.unsplash.com/photo-1544829728-d6a8e4da3d2e",
            "Blue sky with clouds",
        ),
        BackgroundSuggestion::image(
            "https://images.unsplash.com/photo-1505118380757-91f5f5632de0",
            "Ocean waves",
        ),
    ]
}

// ============================================================================
// Generator
// ============================================================================

/// Locally computed stand-in results for when the model path is unavailable.
pub struct FallbackGenerator {
    rng: StdRng,
}

impl FallbackGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded construction for reproducible output.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Lexicon-based sentiment scoring. Every positive-word occurrence adds
    /// 0.2 to the score and every negative-word occurrence subtracts 0.2,
    /// clamped to [-1, 1]; the emotion vector follows the score linearly
    /// except for the randomized surprise term.
    pub fn sentiment(&mut self, text: &str) -> SentimentAnalysis {
        let positive = positive_words();
        let negative = negative_words();

        let mut score = 0.0_f64;
        let lower = text.to_lowercase();
        for word in lower.split(|c: char| !c.is_alphanumeric()) {
            if word.is_empty() {
                continue;
            }
            if positive.iter().any(|w| *w == word) {
                score += 0.2;
            }
            if negative.iter().any(|w| *w == word) {
                score -= 0.2;
            }
        }
        let score = score.clamp(-1.0, 1.0);

        let emotions = EmotionScores {
            joy: (0.5 + score * 0.5).clamp(0.0, 1.0),
            sadness: (0.5 - score * 0.5).clamp(0.0, 1.0),
            anger: (0.3 - score * 0.3).clamp(0.0, 1.0),
            fear: (0.2 - score * 0.2).clamp(0.0, 1.0),
            surprise: self.rng.gen::<f64>() * 0.5 + 0.2,
        };

        SentimentAnalysis {
            sentiment: Sentiment::from_score(score),
            score,
            emotions,
        }
    }

    /// Minimal text-only enhancement: terminal punctuation, three template
    /// variations, and insights inferred from topic buckets and quote length.
    pub fn enhancement(&mut self, text: &str) -> EnhanceQuoteResult {
        let mut enhanced_quote = text.to_string();
        if !enhanced_quote.ends_with('.')
            && !enhanced_quote.ends_with('!')
            && !enhanced_quote.ends_with('?')
        {
            enhanced_quote.push('.');
        }

        let variations = vec![
            format!("In truth, {text}"),
            format!("{text} Indeed, this is the way forward."),
            format!("Remember: {text}"),
        ];

        let lower = text.to_lowercase();
        let (theme, tone) = if lower.contains("success")
            || lower.contains("achieve")
            || lower.contains("goal")
        {
            ("Achievement", "Motivational")
        } else if lower.contains("love") || lower.contains("heart") || lower.contains("together") {
            ("Relationships", "Emotional")
        } else if lower.contains("think") || lower.contains("know") || lower.contains("mind") {
            ("Wisdom", "Philosophical")
        } else {
            ("Personal growth", "Inspirational")
        };

        let length = text.chars().count();
        let style_advice = if length < 50 {
            "Use larger typography with a bold, attention-grabbing background."
        } else if length > 150 {
            "Use a more compact layout with a subtle background that doesn't distract from the text."
        } else {
            "Use a clean, minimalist design with ample white space."
        };

        EnhanceQuoteResult {
            enhanced_quote,
            variations,
            insights: QuoteInsights {
                theme: theme.to_string(),
                tone: tone.to_string(),
                style_advice: style_advice.to_string(),
            },
        }
    }

    /// Four curated ideas, with one slot swapped for a keyword-derived
    /// concept when the quote has usable words and one more for a
    /// theme-derived concept when a known theme is supplied.
    pub fn image_ideas(&mut self, text: &str, theme: Option<&str>) -> ImageIdeasResult {
        let mut ideas = default_ideas();

        let words = keywords::content_words(text);
        if let Some(word) = words.choose(&mut self.rng) {
            let slot = self.rng.gen_range(0..ideas.len());
            ideas[slot] = ImageIdea::new(
                format!("Visual metaphor related to \"{word}\""),
                "Conceptual art",
                format!(
                    "Conceptual artistic representation of {word}, symbolic imagery, thoughtful composition, meaningful visual metaphor."
                ),
            );
        }

        if let Some(theme) = theme.map(str::trim).filter(|t| !t.is_empty() && *t != "Unknown") {
            let slot = self.rng.gen_range(0..ideas.len());
            ideas[slot] = ImageIdea::new(
                format!("Visual representation of the theme: \"{theme}\""),
                "Thematic artwork",
                format!(
                    "Artistic representation of {theme}, thematic visual elements, symbolic imagery, cohesive color palette, meaningful composition."
                ),
            );
        }

        ImageIdeasResult { ideas }
    }

    /// Sentiment-keyed variant: four base suggestions plus topic extras,
    /// shuffled and trimmed to four.
    pub fn backgrounds(&mut self, text: &str, sentiment: Sentiment) -> Vec<BackgroundSuggestion> {
        let mut pool = sentiment_backgrounds(sentiment);
        pool.extend(topic_backgrounds(text));
        pool.shuffle(&mut self.rng);
        pool.truncate(SUGGESTION_COUNT);
        pool
    }

    /// General-purpose variant: exactly eight suggestions blending the
    /// curated pools with fixed category quotas (1-2 colors, 2-3 gradients,
    /// the remainder images).
    pub fn blended_backgrounds(&mut self) -> Vec<BackgroundSuggestion> {
        let colors = self.rng.gen_range(1..=2usize);
        let gradients = self.rng.gen_range(2..=3usize);
        let images = BLENDED_COUNT - colors - gradients;

        let mut out: Vec<BackgroundSuggestion> = Vec::with_capacity(BLENDED_COUNT);
        out.extend(
            solid_color_pool()
                .choose_multiple(&mut self.rng, colors)
                .cloned(),
        );
        out.extend(
            gradient_pool()
                .choose_multiple(&mut self.rng, gradients)
                .cloned(),
        );
        out.extend(image_pool().choose_multiple(&mut self.rng, images).cloned());
        out.shuffle(&mut self.rng);
        out
    }
}

impl Default for FallbackGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
