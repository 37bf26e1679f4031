//! Shared test helpers for `a11ylens-core` integration tests.
//!
//! In-memory port implementations with scripted failures, plus a retry
//! executor that records delays instead of sleeping.

#![allow(dead_code)]

pub mod fakes;

use std::sync::Arc;

use a11ylens_common::resilience::{RecordingSleeper, RetryConfig, RetryExecutor, Sleeper};
use a11ylens_core::StoreRetry;

/// Build a store executor with `max_attempts` and a 1 s initial delay that
/// records delays in `sleeper`.
pub fn recording_retry(max_attempts: u32, sleeper: &RecordingSleeper) -> StoreRetry {
    let config = RetryConfig::builder()
        .max_attempts(max_attempts)
        .initial_delay_ms(1000)
        .build()
        .expect("valid retry config");
    let sleeper: Arc<dyn Sleeper> = Arc::new(sleeper.clone());
    RetryExecutor::with_sleeper(config, sleeper)
}
