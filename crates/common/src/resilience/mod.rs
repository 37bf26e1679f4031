//! Resilience patterns for remote operations
//!
//! This module provides the retry policy used around every call into the
//! persistent store:
//! - **Classification**: decides whether a failure is worth another attempt by
//!   looking for transient hints in the error message
//! - **Retry Executor**: runs an operation up to a bounded number of attempts
//!   with doubling delays between transient failures
//! - **Sleepers**: the delay primitive, swappable so tests can observe delays
//!   without waiting for them
//!
//! ## Known limitation
//!
//! Classification is string matching on the error's `Display` output. It does
//! not look at structured error codes, so adapters must phrase transport
//! failures with one of [`TRANSIENT_MARKERS`] for them to be retried.

pub mod classify;
#[cfg(feature = "runtime")]
pub mod retry;
#[cfg(feature = "runtime")]
pub mod sleep;

pub use classify::{classify, classify_message, FailureClass, TRANSIENT_MARKERS};
#[cfg(feature = "runtime")]
pub use retry::{
    retry_with_config, with_retry, RetryConfig, RetryConfigBuilder, RetryConfigError,
    RetryExecutor, RetryOutcome, DEFAULT_BACKOFF_MULTIPLIER, DEFAULT_INITIAL_DELAY,
    DEFAULT_MAX_ATTEMPTS,
};
#[cfg(feature = "runtime")]
pub use sleep::{RecordingSleeper, Sleeper, TokioSleeper};
