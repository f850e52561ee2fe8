//! Shared request pipeline for the model-backed features.
//!
//! Every feature request runs the same bounded sequence: validate input,
//! build the prompt, one model call, two-stage parse, respond. There are no
//! retries and no queuing; an unavailable model degrades the single request
//! to fallback content instead of failing it. Rate limiting is the one
//! upstream failure callers can distinguish.

use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;

use crate::core::fallback::FallbackGenerator;
use crate::core::keywords;
use crate::core::llm::{GenerationConfig, GenerativeModel};
use crate::core::parser::{self, ParseOutcome};
use crate::core::photos::ImageSearch;
use crate::core::prompts;
use crate::core::types::{
    BackgroundSource, BackgroundSuggestion, EnhanceQuoteResult, ImageIdeasResult, Sentiment,
    SentimentAnalysis,
};

/// Retry hint returned alongside rate-limited degraded results.
pub const RATE_LIMIT_RETRY_MESSAGE: &str =
    "AI service rate limit reached. Please try again later.";

/// Image slots a remote background search tries to fill.
const IMAGE_SLOTS: usize = 4;

/// Pipeline stages a request moves through, logged for observability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    BuildingPrompt,
    AwaitingModel,
    Parsing,
    Validating,
    Done,
    Degraded,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeatureError {
    #[error("text must be a non-empty string")]
    InvalidInput,
}

/// Terminal result of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome<T> {
    pub value: T,
    /// True when the value came from the fallback generator because the
    /// model call itself failed.
    pub degraded: bool,
    /// True when the degradation was caused by upstream throttling.
    pub rate_limited: bool,
    /// True when Stage-1 structured parsing produced the value.
    pub structured: bool,
    /// Caller-facing diagnostic, currently only the rate-limit retry hint.
    pub error: Option<String>,
}

fn trace(request_id: Uuid, feature: &str, stage: Stage) {
    log::debug!("[{request_id}] {feature}: {stage:?}");
}

// ============================================================================
// Feature definitions
// ============================================================================

/// One model-backed feature: how it prompts, samples, parses, and degrades.
pub trait Feature {
    type Output;

    fn name(&self) -> &'static str;
    fn text(&self) -> &str;
    fn prompt(&self) -> String;
    fn config(&self) -> GenerationConfig;
    fn fallback(&self, generator: &mut FallbackGenerator) -> Self::Output;
    fn parse(&self, raw: &str, fallback: Self::Output) -> ParseOutcome<Self::Output>;
}

pub struct SentimentFeature<'a> {
    pub text: &'a str,
}

impl Feature for SentimentFeature<'_> {
    type Output = SentimentAnalysis;

    fn name(&self) -> &'static str {
        "analyze-sentiment"
    }

    fn text(&self) -> &str {
        self.text
    }

    fn prompt(&self) -> String {
        prompts::sentiment_prompt(self.text)
    }

    fn config(&self) -> GenerationConfig {
        GenerationConfig::new()
    }

    fn fallback(&self, generator: &mut FallbackGenerator) -> SentimentAnalysis {
        generator.sentiment(self.text)
    }

    fn parse(&self, raw: &str, fallback: SentimentAnalysis) -> ParseOutcome<SentimentAnalysis> {
        parser::parse_sentiment(raw, fallback)
    }
}

pub struct EnhanceFeature<'a> {
    pub text: &'a str,
    pub style: Option<&'a str>,
}

impl Feature for EnhanceFeature<'_> {
    type Output = EnhanceQuoteResult;

    fn name(&self) -> &'static str {
        "enhance-quote"
    }

    fn text(&self) -> &str {
        self.text
    }

    fn prompt(&self) -> String {
        prompts::enhance_prompt(self.text, self.style)
    }

    fn config(&self) -> GenerationConfig {
        GenerationConfig::creative()
    }

    fn fallback(&self, generator: &mut FallbackGenerator) -> EnhanceQuoteResult {
        generator.enhancement(self.text)
    }

    fn parse(&self, raw: &str, fallback: EnhanceQuoteResult) -> ParseOutcome<EnhanceQuoteResult> {
        parser::parse_enhancement(raw, self.text, fallback)
    }
}

pub struct ImageIdeasFeature<'a> {
    pub text: &'a str,
    pub theme: Option<&'a str>,
    pub tone: Option<&'a str>,
}

impl Feature for ImageIdeasFeature<'_> {
    type Output = ImageIdeasResult;

    fn name(&self) -> &'static str {
        "generate-image-ideas"
    }

    fn text(&self) -> &str {
        self.text
    }

    fn prompt(&self) -> String {
        prompts::image_ideas_prompt(self.text, self.theme, self.tone)
    }

    fn config(&self) -> GenerationConfig {
        GenerationConfig::creative()
    }

    fn fallback(&self, generator: &mut FallbackGenerator) -> ImageIdeasResult {
        generator.image_ideas(self.text, self.theme)
    }

    fn parse(&self, raw: &str, fallback: ImageIdeasResult) -> ParseOutcome<ImageIdeasResult> {
        parser::parse_image_ideas(raw, fallback)
    }
}

// ============================================================================
// Model-backed orchestrator
// ============================================================================

/// Runs feature requests against one injected generative model client.
pub struct Orchestrator {
    model: Arc<dyn GenerativeModel>,
}

impl Orchestrator {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    /// Run one feature request end to end. Fails only on invalid input;
    /// every upstream problem resolves to a usable value.
    pub async fn run<F: Feature>(
        &self,
        feature: &F,
        generator: &mut FallbackGenerator,
    ) -> Result<RunOutcome<F::Output>, FeatureError> {
        let request_id = Uuid::new_v4();
        trace(request_id, feature.name(), Stage::Idle);

        if feature.text().trim().is_empty() {
            log::warn!("[{request_id}] {}: rejected blank input", feature.name());
            return Err(FeatureError::InvalidInput);
        }

        trace(request_id, feature.name(), Stage::BuildingPrompt);
        let prompt = feature.prompt();

        trace(request_id, feature.name(), Stage::AwaitingModel);
        match self.model.generate(&prompt, &feature.config()).await {
            Ok(raw) => {
                trace(request_id, feature.name(), Stage::Parsing);
                let fallback = feature.fallback(generator);
                let ParseOutcome { value, structured } = feature.parse(&raw, fallback);

                trace(request_id, feature.name(), Stage::Validating);
                if !structured {
                    log::warn!(
                        "[{request_id}] {}: structured parse failed, fields recovered by scan",
                        feature.name()
                    );
                }

                trace(request_id, feature.name(), Stage::Done);
                Ok(RunOutcome {
                    value,
                    degraded: false,
                    rate_limited: false,
                    structured,
                    error: None,
                })
            }
            Err(err) if err.is_rate_limited() => {
                log::warn!("[{request_id}] {}: rate limited: {err}", feature.name());
                trace(request_id, feature.name(), Stage::Degraded);
                Ok(RunOutcome {
                    value: feature.fallback(generator),
                    degraded: true,
                    rate_limited: true,
                    structured: false,
                    error: Some(RATE_LIMIT_RETRY_MESSAGE.to_string()),
                })
            }
            Err(err) => {
                log::error!("[{request_id}] {}: model call failed: {err}", feature.name());
                trace(request_id, feature.name(), Stage::Degraded);
                Ok(RunOutcome {
                    value: feature.fallback(generator),
                    degraded: true,
                    rate_limited: false,
                    structured: false,
                    error: None,
                })
            }
        }
    }
}

// ============================================================================
// Background orchestrator
// ============================================================================

/// Background suggestion flow. Not model-backed: the explicit source
/// selector picks either the deterministic generator or one image-search
/// provider. There is no implicit provider precedence.
pub struct BackgroundOrchestrator {
    unsplash: Option<Arc<dyn ImageSearch>>,
    pexels: Option<Arc<dyn ImageSearch>>,
}

impl BackgroundOrchestrator {
    pub fn new(
        unsplash: Option<Arc<dyn ImageSearch>>,
        pexels: Option<Arc<dyn ImageSearch>>,
    ) -> Self {
        Self { unsplash, pexels }
    }

    pub async fn suggest(
        &self,
        text: &str,
        sentiment: Option<Sentiment>,
        source: BackgroundSource,
        generator: &mut FallbackGenerator,
    ) -> Result<Vec<BackgroundSuggestion>, FeatureError> {
        let request_id = Uuid::new_v4();
        trace(request_id, "suggest-background", Stage::Idle);

        if text.trim().is_empty() {
            log::warn!("[{request_id}] suggest-background: rejected blank input");
            return Err(FeatureError::InvalidInput);
        }

        let provider = match source {
            BackgroundSource::Mock => {
                // Generator-built set: sentiment-keyed when the caller told
                // us the mood, otherwise a blend across all three kinds.
                trace(request_id, "suggest-background", Stage::Done);
                return Ok(match sentiment {
                    Some(s) => generator.backgrounds(text, s),
                    None => generator.blended_backgrounds(),
                });
            }
            BackgroundSource::Unsplash => self.unsplash.as_ref(),
            BackgroundSource::Pexels => self.pexels.as_ref(),
        };

        let sentiment = sentiment.unwrap_or(Sentiment::Neutral);

        let Some(provider) = provider else {
            log::warn!(
                "[{request_id}] suggest-background: {source:?} source not configured, using generator"
            );
            trace(request_id, "suggest-background", Stage::Degraded);
            return Ok(generator.backgrounds(text, sentiment));
        };

        trace(request_id, "suggest-background", Stage::AwaitingModel);
        let mut backgrounds = self
            .search_keywords(request_id, provider.as_ref(), text, sentiment)
            .await;

        if backgrounds.len() < IMAGE_SLOTS {
            let fill = generator.backgrounds(text, sentiment);
            for bg in fill {
                if backgrounds.len() >= IMAGE_SLOTS {
                    break;
                }
                if !backgrounds.iter().any(|b| b.value == bg.value) {
                    backgrounds.push(bg);
                }
            }
        }

        trace(request_id, "suggest-background", Stage::Done);
        Ok(backgrounds)
    }

    /// One search per keyword slot. A failed or empty slot is skipped, not
    /// fatal; the caller fills whatever remains from the generator.
    async fn search_keywords(
        &self,
        request_id: Uuid,
        provider: &dyn ImageSearch,
        text: &str,
        sentiment: Sentiment,
    ) -> Vec<BackgroundSuggestion> {
        let mut candidates = keywords::extract_keywords(text, sentiment);
        for kw in keywords::sentiment_keywords(sentiment) {
            if !candidates.iter().any(|c| c == kw) {
                candidates.push(kw.to_string());
            }
        }

        let mut backgrounds = Vec::new();
        for keyword in &candidates {
            if backgrounds.len() >= IMAGE_SLOTS {
                break;
            }
            match provider.search(keyword).await {
                Ok(Some(hit)) => {
                    backgrounds.push(BackgroundSuggestion::image(
                        hit.url,
                        format!(
                            "{keyword} (via {} by {})",
                            provider.label(),
                            hit.photographer
                        ),
                    ));
                }
                Ok(None) => {
                    log::debug!(
                        "[{request_id}] suggest-background: no {} results for '{keyword}'",
                        provider.label()
                    );
                }
                Err(err) => {
                    log::warn!(
                        "[{request_id}] suggest-background: {} search failed for '{keyword}': {err}",
                        provider.label()
                    );
                }
            }
        }
        backgrounds
    }
}

// ============================================================================
// Tests
// ============================================================================
