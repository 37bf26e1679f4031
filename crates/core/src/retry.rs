//! Retry executor shared by the services for store calls

use std::sync::Arc;

use a11ylens_common::resilience::{RetryConfig, RetryExecutor, Sleeper, TokioSleeper};
use a11ylens_domain::{A11yError, Result, RetrySettings};

/// Executor type held by services
///
/// The sleeper is type-erased so tests can swap in a `RecordingSleeper`
/// without making every service generic.
pub type StoreRetry = RetryExecutor<Arc<dyn Sleeper>>;

/// Build the store executor from configuration, sleeping on the tokio timer
///
/// # Errors
/// Returns `A11yError::Config` when `max_attempts` is zero.
pub fn store_retry(settings: &RetrySettings) -> Result<StoreRetry> {
    let config = RetryConfig::builder()
        .max_attempts(settings.max_attempts)
        .initial_delay_ms(settings.initial_delay_ms)
        .build()
        .map_err(|e| A11yError::Config(e.to_string()))?;

    Ok(RetryExecutor::with_sleeper(config, tokio_sleeper()))
}

pub(crate) fn default_store_retry() -> StoreRetry {
    RetryExecutor::with_sleeper(RetryConfig::default(), tokio_sleeper())
}

fn tokio_sleeper() -> Arc<dyn Sleeper> {
    Arc::new(TokioSleeper)
}
