//! Bounded retry executor with exponential backoff
//!
//! Runs an async operation, and on transient failures runs it again up to a
//! fixed number of total attempts. The delay before the second attempt is
//! the configured initial delay and it doubles after every further failure.
//! There is no jitter and no delay cap.
//!
//! The executor is a pass-through for the operation's error type: once the
//! budget is spent, or as soon as a failure classifies as terminal, the most
//! recent error is returned exactly as the operation produced it.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, instrument, warn};

use super::classify::{classify, FailureClass};
use super::sleep::{Sleeper, TokioSleeper};

/// Default number of total attempts
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default delay before the second attempt
pub const DEFAULT_INITIAL_DELAY: Duration = Duration::from_millis(1000);

/// Default growth factor applied to the delay after each failed attempt
pub const DEFAULT_BACKOFF_MULTIPLIER: u32 = 2;

/// Errors raised while building a [`RetryConfig`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RetryConfigError {
    /// A zero attempt budget would never invoke the operation
    #[error("Invalid retry configuration: max_attempts must be greater than 0")]
    ZeroAttempts,

    /// A zero multiplier would collapse every delay after the first
    #[error("Invalid retry configuration: backoff_multiplier must be at least 1")]
    ZeroMultiplier,
}

/// Retry policy configuration
///
/// Construct through [`RetryConfig::builder`] so the attempt budget is always
/// at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    max_attempts: u32,
    initial_delay: Duration,
    backoff_multiplier: u32,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            initial_delay: DEFAULT_INITIAL_DELAY,
            backoff_multiplier: DEFAULT_BACKOFF_MULTIPLIER,
        }
    }
}

impl RetryConfig {
    /// Create a configuration builder seeded with the defaults
    pub fn builder() -> RetryConfigBuilder {
        RetryConfigBuilder::new()
    }

    /// Total attempts allowed, including the first
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay before the second attempt
    pub fn initial_delay(&self) -> Duration {
        self.initial_delay
    }

    /// Factor applied to the delay after each failed attempt
    pub fn backoff_multiplier(&self) -> u32 {
        self.backoff_multiplier
    }

    /// Delay that precedes retry number `retry_index` (0-based).
    ///
    /// Equals `initial_delay * multiplier^retry_index`, saturating at
    /// `Duration::MAX` rather than overflowing.
    pub fn delay_for(&self, retry_index: u32) -> Duration {
        (0..retry_index).fold(self.initial_delay, |delay, _| {
            delay.saturating_mul(self.backoff_multiplier)
        })
    }

    fn validate(&self) -> Result<(), RetryConfigError> {
        if self.max_attempts == 0 {
            return Err(RetryConfigError::ZeroAttempts);
        }
        if self.backoff_multiplier == 0 {
            return Err(RetryConfigError::ZeroMultiplier);
        }
        Ok(())
    }
}

/// Builder for [`RetryConfig`] with fluent API
#[derive(Debug, Default)]
pub struct RetryConfigBuilder {
    config: RetryConfig,
}

impl RetryConfigBuilder {
    /// Create a builder seeded with the defaults
    pub fn new() -> Self {
        Self { config: RetryConfig::default() }
    }

    /// Set the total attempt budget, including the first attempt
    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.config.max_attempts = attempts;
        self
    }

    /// Set the delay before the second attempt
    pub fn initial_delay(mut self, delay: Duration) -> Self {
        self.config.initial_delay = delay;
        self
    }

    /// Set the initial delay in milliseconds
    pub fn initial_delay_ms(self, millis: u64) -> Self {
        self.initial_delay(Duration::from_millis(millis))
    }

    /// Set the factor applied to the delay after each failed attempt
    pub fn backoff_multiplier(mut self, multiplier: u32) -> Self {
        self.config.backoff_multiplier = multiplier;
        self
    }

    /// Validate and return the configuration.
    ///
    /// # Errors
    /// Returns [`RetryConfigError`] for a zero attempt budget or multiplier.
    pub fn build(self) -> Result<RetryConfig, RetryConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Result of an execution plus what it took to get there
#[derive(Debug)]
pub struct RetryOutcome<T, E> {
    pub result: Result<T, E>,
    /// Attempts made, including the one that produced `result`
    pub attempts: u32,
    /// Delays waited between attempts, in order
    pub delays: Vec<Duration>,
    /// Class of the final failure; `None` on success
    pub final_class: Option<FailureClass>,
}

impl<T, E> RetryOutcome<T, E> {
    /// Consume the outcome and return only the result.
    pub fn into_result(self) -> Result<T, E> {
        self.result
    }

    /// Sum of every delay waited
    pub fn total_delay(&self) -> Duration {
        self.delays.iter().fold(Duration::ZERO, |acc, d| acc.saturating_add(*d))
    }
}

/// The retry executor
///
/// Holds no per-call state: every call to [`RetryExecutor::execute`] starts
/// its own attempt counter and delay, so one executor can serve concurrent
/// callers.
#[derive(Clone)]
pub struct RetryExecutor<S = TokioSleeper> {
    config: RetryConfig,
    sleeper: S,
}

// The sleeper is left out so type-erased sleepers need not be `Debug`.
impl<S> fmt::Debug for RetryExecutor<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryExecutor").field("config", &self.config).finish_non_exhaustive()
    }
}

impl RetryExecutor<TokioSleeper> {
    /// Create an executor that sleeps on the tokio timer
    pub fn new(config: RetryConfig) -> Self {
        Self::with_sleeper(config, TokioSleeper)
    }
}

impl Default for RetryExecutor<TokioSleeper> {
    fn default() -> Self {
        Self::new(RetryConfig::default())
    }
}

impl<S: Sleeper> RetryExecutor<S> {
    /// Create an executor with a custom delay primitive
    pub fn with_sleeper(config: RetryConfig, sleeper: S) -> Self {
        Self { config, sleeper }
    }

    /// Policy this executor applies to every call
    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// Execute an operation with retry logic.
    ///
    /// Returns the first success, or the last observed error unchanged.
    pub async fn execute<F, Fut, T, E>(&self, operation: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: fmt::Display,
    {
        self.execute_with_outcome(operation).await.into_result()
    }

    /// Execute an operation with retry logic and return outcome statistics.
    #[instrument(skip(self, operation), fields(max_attempts = self.config.max_attempts))]
    pub async fn execute_with_outcome<F, Fut, T, E>(&self, mut operation: F) -> RetryOutcome<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: fmt::Display,
    {
        let max_attempts = self.config.max_attempts;
        let mut current_delay = self.config.initial_delay;
        let mut delays = Vec::new();
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;
            debug!("Executing operation (attempt {}/{})", attempt, max_attempts);

            let error = match operation().await {
                Ok(value) => {
                    if attempt > 1 {
                        debug!("Operation succeeded after {} retries", attempt - 1);
                    }
                    return RetryOutcome { result: Ok(value), attempts: attempt, delays, final_class: None };
                }
                Err(error) => error,
            };

            let class = classify(&error);
            if class == FailureClass::Terminal {
                debug!(attempt, error = %error, "Terminal failure, not retrying");
                return RetryOutcome {
                    result: Err(error),
                    attempts: attempt,
                    delays,
                    final_class: Some(class),
                };
            }

            if attempt >= max_attempts {
                warn!(attempts = attempt, error = %error, "All retry attempts exhausted");
                return RetryOutcome {
                    result: Err(error),
                    attempts: attempt,
                    delays,
                    final_class: Some(class),
                };
            }

            warn!(
                "Attempt {}/{} failed ({}), retrying in {:?}",
                attempt, max_attempts, error, current_delay
            );
            self.sleeper.sleep(current_delay).await;
            delays.push(current_delay);
            current_delay = current_delay.saturating_mul(self.config.backoff_multiplier);
        }
    }
}

/// Run `operation` with the default policy (3 attempts, 1 s initial delay).
pub async fn with_retry<F, Fut, T, E>(operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: fmt::Display,
{
    RetryExecutor::default().execute(operation).await
}

/// Run `operation` with an explicit policy.
pub async fn retry_with_config<F, Fut, T, E>(config: RetryConfig, operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: fmt::Display,
{
    RetryExecutor::new(config).execute(operation).await
}
