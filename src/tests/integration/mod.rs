//! Integration tests for the quote assistant
//!
//! End-to-end flows that cross module boundaries:
//!
//! - `feature_flow`: every feature pipeline run against a scripted model,
//!   covering structured replies, tolerant-scan recovery, rate limiting,
//!   silent degradation, and background slot filling around flaky providers
//! - `service_flow`: the wire client driven through the orchestrator against
//!   a mock upstream endpoint, plus the HTTP service lifecycle on a real
//!   socket
//!
//! Everything here runs without API keys; remote endpoints are mock servers
//! or scripted trait implementations.
