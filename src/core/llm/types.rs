//! Generation request parameters.

use serde::{Deserialize, Serialize};

/// Sampling parameters for one generation call.
///
/// Serializes to the camelCase shape the Gemini `generationConfig` field
/// expects, so a config can be embedded in a request body directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Creativity, clamped to `[0, 1]`.
    pub temperature: f64,
    /// Nucleus sampling bound.
    pub top_p: f64,
    /// Top-k sampling bound.
    pub top_k: u32,
    /// Output budget in tokens.
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.95,
            top_k: 40,
            max_output_tokens: 4096,
        }
    }
}

impl GenerationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Higher-temperature preset used for creative rewriting.
    pub fn creative() -> Self {
        Self::default().with_temperature(1.0)
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature.clamp(0.0, 1.0);
        self
    }

    pub fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = top_p.clamp(0.0, 1.0);
        self
    }

    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }
}
