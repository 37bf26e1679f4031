//! Delay primitive used between retry attempts
//!
//! The executor never calls `tokio::time::sleep` directly. It asks a
//! [`Sleeper`], so production code suspends on the tokio timer while tests
//! record the requested delays and return immediately.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

/// Cooperative delay between attempts
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Suspend the current task for `delay`
    async fn sleep(&self, delay: Duration);
}

/// Real sleeper backed by the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl<T: Sleeper + ?Sized> Sleeper for Arc<T> {
    async fn sleep(&self, delay: Duration) {
        (**self).sleep(delay).await
    }
}

/// Sleeper that records every requested delay and returns immediately
///
/// Clones share the same log, so a test can hand one clone to the executor
/// and inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct RecordingSleeper {
    delays: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingSleeper {
    /// Create a sleeper with an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays requested so far, in order
    pub fn delays(&self) -> Vec<Duration> {
        self.delays.lock().map(|d| d.clone()).unwrap_or_default()
    }

    /// Number of delays requested so far
    pub fn count(&self) -> usize {
        self.delays.lock().map(|d| d.len()).unwrap_or(0)
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, delay: Duration) {
        if let Ok(mut delays) = self.delays.lock() {
            delays.push(delay);
        }
    }
}
