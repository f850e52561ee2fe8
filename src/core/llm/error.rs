//! Generative model error types.

/// Errors that can occur when calling the generative model service.
#[derive(Debug, thiserror::Error)]
pub enum GenAiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited: {message}")]
    RateLimited { message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for generative model operations
pub type Result<T> = std::result::Result<T, GenAiError>;

/// Phrases upstream providers use to signal throttling.
const RATE_LIMIT_INDICATORS: [&str; 4] = [
    "rate limit",
    "resource exhausted",
    "quota exceeded",
    "too many requests",
];

/// True when an upstream error message carries a rate-limit indicator.
pub fn is_rate_limit_message(message: &str) -> bool {
    let lower = message.to_lowercase();
    RATE_LIMIT_INDICATORS
        .iter()
        .any(|indicator| lower.contains(indicator))
}

impl GenAiError {
    /// Classify a non-success upstream reply. HTTP 429 and rate-limit
    /// phrasing in the body both count as throttling.
    pub fn from_api_failure(status: u16, message: String) -> Self {
        if status == 429 || is_rate_limit_message(&message) {
            GenAiError::RateLimited { message }
        } else {
            GenAiError::Api { status, message }
        }
    }

    /// True for the one failure callers may surface as a distinct outcome.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, GenAiError::RateLimited { .. })
    }
}
