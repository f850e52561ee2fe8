//! Stock photo providers backing the remote background sources.
//!
//! Both providers expose one keyword search returning at most one photo,
//! keyed by an access credential. Failures here are never fatal to a
//! request; the orchestrator skips the slot and fills from the generator.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

const DEFAULT_TIMEOUT_SECS: u64 = 15;
const UNSPLASH_BASE_URL: &str = "https://api.unsplash.com";
const PEXELS_BASE_URL: &str = "https://api.pexels.com";

#[derive(Debug, Error)]
pub enum PhotoError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("provider credential not configured")]
    NotConfigured,

    #[error("unexpected response shape: {0}")]
    InvalidResponse(String),
}

pub type Result<T> = std::result::Result<T, PhotoError>;

/// One photo returned by a provider search.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoHit {
    pub url: String,
    pub photographer: String,
}

/// Keyword search against a stock photo provider.
#[async_trait]
pub trait ImageSearch: Send + Sync {
    /// Provider name used in suggestion attributions.
    fn label(&self) -> &'static str;

    /// Best photo for the keyword, or `None` when the provider has no match.
    async fn search(&self, keyword: &str) -> Result<Option<PhotoHit>>;
}

// ============================================================================
// Unsplash
// ============================================================================

pub struct UnsplashClient {
    access_key: String,
    base_url: String,
    client: Client,
}

impl UnsplashClient {
    pub fn new(access_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            access_key: access_key.trim().to_string(),
            base_url: UNSPLASH_BASE_URL.to_string(),
            client,
        }
    }

    /// Override the API endpoint, used by tests against a local server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl ImageSearch for UnsplashClient {
    fn label(&self) -> &'static str {
        "Unsplash"
    }

    async fn search(&self, keyword: &str) -> Result<Option<PhotoHit>> {
        if self.access_key.is_empty() {
            return Err(PhotoError::NotConfigured);
        }

        let url = format!(
            "{}/photos/random?query={}&orientation=landscape",
            self.base_url,
            urlencoding::encode(keyword)
        );

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Client-ID {}", self.access_key))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(PhotoError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let data: Value = response.json().await?;
        match (data["urls"]["regular"].as_str(), data["user"]["name"].as_str()) {
            (Some(url), Some(photographer)) => Ok(Some(PhotoHit {
                url: url.to_string(),
                photographer: photographer.to_string(),
            })),
            _ => Err(PhotoError::InvalidResponse(
                "missing urls.regular or user.name".to_string(),
            )),
        }
    }
}

// ============================================================================
// Pexels
// ============================================================================

pub struct PexelsClient {
    api_key: String,
    base_url: String,
    client: Client,
}

impl PexelsClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_key: api_key.trim().to_string(),
            base_url: PEXELS_BASE_URL.to_string(),
            client,
        }
    }

    /// Override the API endpoint, used by tests against a local server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl ImageSearch for PexelsClient {
    fn label(&self) -> &'static str {
        "Pexels"
    }

    async fn search(&self, keyword: &str) -> Result<Option<PhotoHit>> {
        if self.api_key.is_empty() {
            return Err(PhotoError::NotConfigured);
        }

        let url = format!(
            "{}/v1/search?query={}&per_page=1&orientation=landscape",
            self.base_url,
            urlencoding::encode(keyword)
        );

        let response = self
            .client
            .get(&url)
            .header("Authorization", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(PhotoError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let data: Value = response.json().await?;
        let Some(photos) = data["photos"].as_array() else {
            return Err(PhotoError::InvalidResponse(
                "missing photos array".to_string(),
            ));
        };
        let Some(photo) = photos.first() else {
            return Ok(None);
        };

        match (
            photo["src"]["large"].as_str(),
            photo["photographer"].as_str(),
        ) {
            (Some(url), Some(photographer)) => Ok(Some(PhotoHit {
                url: url.to_string(),
                photographer: photographer.to_string(),
            })),
            _ => Err(PhotoError::InvalidResponse(
                "missing src.large or photographer".to_string(),
            )),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
