/// Quotesmith - AI-Assisted Quote Image Service
///
/// Core library providing sentiment analysis, quote enhancement, image idea
/// generation, and background suggestion for quote image editors.

pub mod api;
pub mod config;
pub mod core;


pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
