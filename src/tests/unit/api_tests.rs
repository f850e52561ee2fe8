//! API Route Unit Tests
//!
//! Drives every route through the router with tower's `oneshot`:
//! - Input validation and per-route error messages
//! - Success payload shapes (camelCase wire names, palettes alongside
//!   backgrounds)
//! - Rate-limit mapping to 429 with a usable fallback payload
//! - Silent fallback on non-throttling model failures

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use rstest::rstest;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::api::{router, ServiceState};
use crate::core::orchestrator::{BackgroundOrchestrator, Orchestrator, RATE_LIMIT_RETRY_MESSAGE};
use crate::core::types::SentimentAnalysis;
use crate::tests::common::{ENHANCE_RAW_JSON, IDEAS_RAW_JSON, SENTIMENT_RAW_JSON};
use crate::tests::mocks::{self, MockModel, MockPhotoSearch};

// =============================================================================
// Test Setup
// =============================================================================

fn state_with_model(model: MockModel) -> Arc<ServiceState> {
    Arc::new(ServiceState::new(
        Orchestrator::new(Arc::new(model)),
        BackgroundOrchestrator::new(None, None),
    ))
}

fn state_with_search(search: MockPhotoSearch) -> Arc<ServiceState> {
    Arc::new(ServiceState::new(
        Orchestrator::new(Arc::new(mocks::scripted_model("{}"))),
        BackgroundOrchestrator::new(Some(Arc::new(search)), None),
    ))
}

async fn post_json(app: axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

// =============================================================================
// Health Tests
// =============================================================================

#[tokio::test]
async fn test_health_reports_identity() {
    let app = router(state_with_model(mocks::scripted_model("{}")));
    let (status, value) = get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["service"], "quotesmith");
    assert_eq!(value["status"], "ok");
    assert!(value["version"].as_str().is_some_and(|v| !v.is_empty()));
    assert!(value["startedAt"].as_str().is_some());
}

// =============================================================================
// Input Validation Tests
// =============================================================================

#[rstest]
#[case("/api/analyze-sentiment", "Invalid request. Text is required.")]
#[case("/api/enhance-quote", "Invalid request. Quote text is required.")]
#[case("/api/generate-image-ideas", "Invalid request. Quote text is required.")]
#[case("/api/suggest-background", "Invalid request. Text is required.")]
#[tokio::test]
async fn test_routes_reject_missing_text(#[case] uri: &str, #[case] message: &str) {
    let app = router(state_with_model(mocks::scripted_model("{}")));
    let (status, value) = post_json(app, uri, json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["error"], message);
}

#[rstest]
#[case::non_string(json!({ "text": 42 }))]
#[case::null(json!({ "text": null }))]
#[case::empty(json!({ "text": "" }))]
#[case::blank(json!({ "text": "   " }))]
#[tokio::test]
async fn test_analyze_sentiment_rejects_unusable_text(#[case] body: Value) {
    let app = router(state_with_model(mocks::scripted_model("{}")));
    let (status, value) = post_json(app, "/api/analyze-sentiment", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["error"], "Invalid request. Text is required.");
}

#[tokio::test]
async fn test_malformed_json_body_is_client_error() {
    let app = router(state_with_model(mocks::scripted_model("{}")));
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/analyze-sentiment")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Feature Payload Tests
// =============================================================================

#[tokio::test]
async fn test_analyze_sentiment_success_payload() {
    let app = router(state_with_model(mocks::scripted_model(SENTIMENT_RAW_JSON)));
    let (status, value) = post_json(
        app,
        "/api/analyze-sentiment",
        json!({ "text": "What a wonderful day" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["sentiment"], "positive");
    assert_eq!(value["score"], 0.8);
    assert_eq!(value["emotions"]["joy"], 0.9);
    assert!(value.get("error").is_none());
}

#[tokio::test]
async fn test_enhance_quote_success_payload() {
    let app = router(state_with_model(mocks::scripted_model(ENHANCE_RAW_JSON)));
    let (status, value) = post_json(
        app,
        "/api/enhance-quote",
        json!({ "text": "Dream big", "style": "inspirational" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        value["enhancedQuote"],
        "Dream big, for dreams chart the course of greatness."
    );
    assert_eq!(value["variations"].as_array().map(Vec::len), Some(3));
    assert!(value["insights"]["styleAdvice"].as_str().is_some());
}

#[tokio::test]
async fn test_generate_image_ideas_success_payload() {
    let app = router(state_with_model(mocks::scripted_model(IDEAS_RAW_JSON)));
    let (status, value) = post_json(
        app,
        "/api/generate-image-ideas",
        json!({ "text": "Calm seas ahead", "theme": "Perseverance" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["ideas"].as_array().map(Vec::len), Some(2));
    assert!(value["ideas"][0]["prompt"].as_str().is_some());
}

// =============================================================================
// Degradation Tests
// =============================================================================

#[tokio::test]
async fn test_rate_limit_maps_to_429_with_fallback_payload() {
    let app = router(state_with_model(mocks::rate_limited_model()));
    let (status, value) = post_json(
        app,
        "/api/analyze-sentiment",
        json!({ "text": "Still a lovely day" }),
    )
    .await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(value["error"], RATE_LIMIT_RETRY_MESSAGE);
    // The payload still carries a usable analysis next to the retry hint.
    let mut payload = value.clone();
    payload.as_object_mut().unwrap().remove("error");
    let analysis: SentimentAnalysis = serde_json::from_value(payload).unwrap();
    assert!(analysis.is_valid());
}

#[tokio::test]
async fn test_model_failure_serves_silent_fallback() {
    let app = router(state_with_model(mocks::failing_model()));
    let (status, value) = post_json(
        app,
        "/api/analyze-sentiment",
        json!({ "text": "I love this beautiful morning" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(value.get("error").is_none());
    let analysis: SentimentAnalysis = serde_json::from_value(value).unwrap();
    assert!(analysis.is_valid());
}

// =============================================================================
// Background Route Tests
// =============================================================================

#[tokio::test]
async fn test_background_default_source_returns_blend_and_palettes() {
    let app = router(state_with_model(mocks::scripted_model("{}")));
    let (status, value) = post_json(
        app,
        "/api/suggest-background",
        json!({ "text": "quiet morning lake" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["backgrounds"].as_array().map(Vec::len), Some(8));
    assert_eq!(value["palettes"].as_array().map(Vec::len), Some(3));
    assert!(value["palettes"][0]["primary"].as_str().is_some());
}

#[tokio::test]
async fn test_background_with_sentiment_returns_table_set() {
    let app = router(state_with_model(mocks::scripted_model("{}")));
    let (status, value) = post_json(
        app,
        "/api/suggest-background",
        json!({ "text": "quiet morning lake", "sentiment": "positive" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["backgrounds"].as_array().map(Vec::len), Some(4));
}

#[tokio::test]
async fn test_background_unknown_source_falls_back_to_mock() {
    let app = router(state_with_model(mocks::scripted_model("{}")));
    let (status, value) = post_json(
        app,
        "/api/suggest-background",
        json!({ "text": "quiet morning lake", "source": "imgur" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["backgrounds"].as_array().map(Vec::len), Some(8));
}

#[tokio::test]
async fn test_background_unconfigured_provider_degrades_to_generator() {
    let app = router(state_with_model(mocks::scripted_model("{}")));
    let (status, value) = post_json(
        app,
        "/api/suggest-background",
        json!({ "text": "quiet morning lake", "source": "pexels" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["backgrounds"].as_array().map(Vec::len), Some(4));
}

#[tokio::test]
async fn test_background_provider_hits_are_attributed() {
    let app = router(state_with_search(mocks::stock_photo_search()));
    let (status, value) = post_json(
        app,
        "/api/suggest-background",
        json!({ "text": "mountain sunrise adventure", "source": "unsplash" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let backgrounds = value["backgrounds"].as_array().unwrap();
    assert_eq!(backgrounds.len(), 4);
    assert_eq!(backgrounds[0]["type"], "image");
    assert!(backgrounds[0]["description"]
        .as_str()
        .unwrap()
        .contains("via Unsplash by Ada Lensweaver"));
}
