//! Property-based tests for the quote assistant
//!
//! This module contains property-based tests using the proptest framework.
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Test Modules
//!
//! - `fallback_props`: Tests for the deterministic fallback generator
//!   - Sentiment output is always schema-valid
//!   - Same seed reproduces identical output
//!   - Positive lexicon words never lower the score
//!   - Enhancement and image-idea output keep their shape for any text
//!
//! - `parser_props`: Tests for the two-stage reply parser
//!   - Never panics, always yields a valid result for arbitrary input
//!   - Valid JSON wrapped in prose is recovered as structured
//!   - Key-value scanning recovers fields from conversational replies
//!
//! - `background_props`: Tests for background suggestion and keywords
//!   - Blended sets always satisfy the category quotas
//!   - Sentiment-keyed sets always hold four valid suggestions
//!   - Keyword extraction always yields usable search terms
//!
//! ## Configuration
//!
//! By default, proptest runs 256 cases per property. This can be configured
//! via the `PROPTEST_CASES` environment variable:
//!
//! ```sh
//! PROPTEST_CASES=1000 cargo test property --release
//! ```
