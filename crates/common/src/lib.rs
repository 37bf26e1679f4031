//! Shared resilience utilities for the A11y Lens crates.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `foundation`: failure classification (pure, no runtime)
//! - `runtime`: the async retry executor and its delay primitive

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

#[cfg(feature = "foundation")]
pub mod resilience;

// Re-export commonly used types and traits for convenience
// ------------------------
#[cfg(feature = "foundation")]
pub use resilience::{classify, classify_message, FailureClass, TRANSIENT_MARKERS};
#[cfg(feature = "runtime")]
pub use resilience::{
    retry_with_config, with_retry, RecordingSleeper, RetryConfig, RetryConfigBuilder,
    RetryConfigError, RetryExecutor, RetryOutcome, Sleeper, TokioSleeper,
};
