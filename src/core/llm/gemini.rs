//! Gemini client (API key-based).
//!
//! Thin adapter over the Generative Language `generateContent` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::client::GenerativeModel;
use super::error::{GenAiError, Result};
use super::types::GenerationConfig;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-2.0-flash-lite";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Gemini text-generation client.
///
/// Holds an immutable reqwest client with a bounded timeout; safe to share
/// across concurrent requests behind an `Arc`.
pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
    client: Client,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        // Trim the API key at construction to ensure consistency with validation
        Self {
            api_key: api_key.trim().to_string(),
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
            client,
        }
    }

    /// Default flash model.
    pub fn flash(api_key: String) -> Self {
        Self::new(api_key, DEFAULT_MODEL.to_string())
    }

    /// Point the client at a different endpoint (test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Check if an API key has valid Google API key format.
    ///
    /// Keys start with "AIza". Pure format check, does not verify the key
    /// against the API.
    pub fn is_valid_api_key_format(key: &str) -> bool {
        let trimmed = key.trim();
        !trimmed.is_empty() && trimmed.starts_with("AIza")
    }

    fn generate_url(&self) -> String {
        format!("{}/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    fn id(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str, config: &GenerationConfig) -> Result<String> {
        if self.api_key.is_empty() {
            return Err(GenAiError::NotConfigured("gemini".to_string()));
        }

        let body = serde_json::json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }],
            "generationConfig": config,
        });

        let start = std::time::Instant::now();
        let resp = self
            .client
            .post(self.generate_url())
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenAiError::Timeout
                } else {
                    GenAiError::Http(e)
                }
            })?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(GenAiError::from_api_failure(status.as_u16(), text));
        }

        let json: serde_json::Value = resp.json().await?;

        let content = json["candidates"]
            .as_array()
            .and_then(|arr| arr.first())
            .and_then(|c| c["content"]["parts"].as_array())
            .and_then(|parts| parts.first())
            .and_then(|p| p["text"].as_str())
            .ok_or_else(|| GenAiError::InvalidResponse("Missing content".to_string()))?
            .to_string();

        log::debug!(
            "gemini generate: model={} latency_ms={} chars={}",
            self.model,
            start.elapsed().as_millis(),
            content.len()
        );

        Ok(content)
    }
}
