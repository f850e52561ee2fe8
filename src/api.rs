//! HTTP boundary for the quote assistant.
//!
//! Thin axum layer over the orchestrators: each feature route validates the
//! request body, runs one pipeline, and maps the outcome onto a status code.
//! Degraded results keep the normal 200 shape so editor clients never have
//! to special-case an unavailable model; rate limiting is the one upstream
//! condition surfaced as a distinct status.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tokio::sync::oneshot;
use tower_http::cors::{Any, CorsLayer};

use crate::core::fallback::FallbackGenerator;
use crate::core::orchestrator::{
    BackgroundOrchestrator, EnhanceFeature, FeatureError, ImageIdeasFeature, Orchestrator,
    RunOutcome, SentimentFeature,
};
use crate::core::types::{BackgroundSource, BackgroundSuggestion, ColorPalette, Sentiment};

const TEXT_REQUIRED: &str = "Invalid request. Text is required.";
const QUOTE_TEXT_REQUIRED: &str = "Invalid request. Quote text is required.";

// ============================================================================
// Service state
// ============================================================================

/// Shared state handed to every route handler.
pub struct ServiceState {
    orchestrator: Orchestrator,
    backgrounds: BackgroundOrchestrator,
    started_at: DateTime<Utc>,
}

impl ServiceState {
    pub fn new(orchestrator: Orchestrator, backgrounds: BackgroundOrchestrator) -> Self {
        Self {
            orchestrator,
            backgrounds,
            started_at: Utc::now(),
        }
    }
}

// ============================================================================
// Quote service
// ============================================================================

/// HTTP service exposing the feature routes.
pub struct QuoteService {
    addr: String,
    state: Arc<ServiceState>,
    bound: Option<SocketAddr>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl QuoteService {
    /// Create a service that will listen on `addr` (`host:port`) once started.
    pub fn new(addr: impl Into<String>, state: ServiceState) -> Self {
        Self {
            addr: addr.into(),
            state: Arc::new(state),
            bound: None,
            shutdown_tx: None,
        }
    }

    /// Base URL of the running service, `None` before `start`.
    pub fn url(&self) -> Option<String> {
        self.bound.map(|addr| format!("http://{addr}"))
    }

    /// Start serving. Binds before spawning so callers see bind failures
    /// directly and, when given port 0, can read the chosen port from `url`.
    pub async fn start(&mut self) -> Result<(), String> {
        if self.shutdown_tx.is_some() {
            return Err("Service already running".to_string());
        }

        let listener = tokio::net::TcpListener::bind(&self.addr)
            .await
            .map_err(|e| format!("Failed to bind {}: {e}", self.addr))?;
        let bound = listener
            .local_addr()
            .map_err(|e| format!("Failed to read bound address: {e}"))?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let app = router(self.state.clone());

        // Plain HTTP is intentional: the service fronts editors on localhost.
        tokio::spawn(async move {
            log::info!("Quote service started on http://{}", bound);
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                    log::info!("Quote service shutting down");
                })
                .await
                .ok();
        });

        self.bound = Some(bound);
        self.shutdown_tx = Some(shutdown_tx);
        Ok(())
    }

    /// Stop the service.
    pub async fn stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            log::info!("Quote service stopped");
        }
        self.bound = None;
    }

    /// Check if the service is running.
    pub fn is_running(&self) -> bool {
        self.shutdown_tx.is_some()
    }
}

/// Build the route table. Public so tests can drive handlers without a
/// listening socket.
pub fn router(state: Arc<ServiceState>) -> Router {
    Router::new()
        .route("/api/analyze-sentiment", post(analyze_sentiment))
        .route("/api/enhance-quote", post(enhance_quote))
        .route("/api/generate-image-ideas", post(generate_image_ideas))
        .route("/api/suggest-background", post(suggest_background))
        .route("/health", get(health))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .with_state(state)
}

// ============================================================================
// Response shapes
// ============================================================================

/// Feature result plus the optional caller-facing diagnostic.
#[derive(Serialize)]
struct FeaturePayload<T> {
    #[serde(flatten)]
    result: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct BackgroundsPayload {
    backgrounds: Vec<BackgroundSuggestion>,
    palettes: Vec<ColorPalette>,
}

fn invalid_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "error": message })),
    )
        .into_response()
}

/// Map a pipeline outcome onto the wire: 429 plus retry hint when upstream
/// throttled us, plain 200 otherwise (degraded or not).
fn feature_response<T: Serialize>(outcome: RunOutcome<T>) -> Response {
    let status = if outcome.rate_limited {
        StatusCode::TOO_MANY_REQUESTS
    } else {
        StatusCode::OK
    };
    (
        status,
        Json(FeaturePayload {
            result: outcome.value,
            error: outcome.error,
        }),
    )
        .into_response()
}

/// Optional string field, treating empty and non-string values as absent.
fn optional_str<'a>(body: &'a Value, field: &str) -> Option<&'a str> {
    body.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

// ============================================================================
// HTTP handlers
// ============================================================================

/// Health check endpoint
async fn health(State(state): State<Arc<ServiceState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "service": crate::NAME,
        "version": crate::VERSION,
        "status": "ok",
        "startedAt": state.started_at.to_rfc3339(),
    }))
}

/// Sentiment analysis endpoint
async fn analyze_sentiment(
    State(state): State<Arc<ServiceState>>,
    Json(body): Json<Value>,
) -> Response {
    let Some(text) = body.get("text").and_then(Value::as_str) else {
        return invalid_request(TEXT_REQUIRED);
    };

    let mut generator = FallbackGenerator::new();
    match state
        .orchestrator
        .run(&SentimentFeature { text }, &mut generator)
        .await
    {
        Ok(outcome) => feature_response(outcome),
        Err(FeatureError::InvalidInput) => invalid_request(TEXT_REQUIRED),
    }
}

/// Quote enhancement endpoint
async fn enhance_quote(
    State(state): State<Arc<ServiceState>>,
    Json(body): Json<Value>,
) -> Response {
    let Some(text) = body.get("text").and_then(Value::as_str) else {
        return invalid_request(QUOTE_TEXT_REQUIRED);
    };
    let style = optional_str(&body, "style");

    let mut generator = FallbackGenerator::new();
    match state
        .orchestrator
        .run(&EnhanceFeature { text, style }, &mut generator)
        .await
    {
        Ok(outcome) => feature_response(outcome),
        Err(FeatureError::InvalidInput) => invalid_request(QUOTE_TEXT_REQUIRED),
    }
}

/// Image idea generation endpoint
async fn generate_image_ideas(
    State(state): State<Arc<ServiceState>>,
    Json(body): Json<Value>,
) -> Response {
    let Some(text) = body.get("text").and_then(Value::as_str) else {
        return invalid_request(QUOTE_TEXT_REQUIRED);
    };
    let theme = optional_str(&body, "theme");
    let tone = optional_str(&body, "tone");

    let mut generator = FallbackGenerator::new();
    match state
        .orchestrator
        .run(&ImageIdeasFeature { text, theme, tone }, &mut generator)
        .await
    {
        Ok(outcome) => feature_response(outcome),
        Err(FeatureError::InvalidInput) => invalid_request(QUOTE_TEXT_REQUIRED),
    }
}

/// Background suggestion endpoint
async fn suggest_background(
    State(state): State<Arc<ServiceState>>,
    Json(body): Json<Value>,
) -> Response {
    let Some(text) = body.get("text").and_then(Value::as_str) else {
        return invalid_request(TEXT_REQUIRED);
    };
    let sentiment = body
        .get("sentiment")
        .and_then(Value::as_str)
        .map(Sentiment::from_label_or_neutral);
    // Unknown source labels fall back to the generator rather than erroring.
    let source: BackgroundSource = body
        .get("source")
        .map(|v| serde_json::from_value(v.clone()).unwrap_or_default())
        .unwrap_or_default();

    let mut generator = FallbackGenerator::new();
    match state
        .backgrounds
        .suggest(text, sentiment, source, &mut generator)
        .await
    {
        Ok(backgrounds) => Json(BackgroundsPayload {
            backgrounds,
            palettes: ColorPalette::presets(),
        })
        .into_response(),
        Err(FeatureError::InvalidInput) => invalid_request(TEXT_REQUIRED),
    }
}

// ============================================================================
// Tests
// ============================================================================
