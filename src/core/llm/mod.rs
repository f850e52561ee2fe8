//! Generative model client module.
//!
//! Thin adapter around one external text-generation call:
//! - `client`: the `GenerativeModel` trait
//! - `gemini`: API key-based Gemini implementation
//! - `error`: failure classification (rate-limited vs. everything else)
//! - `types`: sampling parameters

pub mod client;
pub mod error;
pub mod gemini;
pub mod types;

pub use client::GenerativeModel;
pub use error::{is_rate_limit_message, GenAiError, Result};
pub use gemini::GeminiClient;
pub use types::GenerationConfig;
