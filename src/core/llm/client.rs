//! Generative model client trait.
//!
//! One outbound call per `generate` invocation, no retries. Retry policy, if
//! any, belongs to the caller; this layer only classifies failures.

use async_trait::async_trait;

use super::error::Result;
use super::types::GenerationConfig;

/// Trait implemented by every text-generation backend.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Unique identifier of the backing provider
    fn id(&self) -> &str;

    /// Model name requests are sent to
    fn model(&self) -> &str;

    /// Run one generation call and return the raw response text.
    async fn generate(&self, prompt: &str, config: &GenerationConfig) -> Result<String>;
}
