//! Store connectivity check
//!
//! The probe is not retried: it reports the state of a single round trip
//! bounded by a timeout.

pub mod ports;

use std::sync::Arc;
use std::time::Duration;

use a11ylens_domain::constants::CONNECTION_PROBE_TIMEOUT;
use serde::Serialize;
use tracing::{error, info};

pub use ports::StoreHealth;

/// Result of a connectivity check, serialized as-is by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionStatus {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConnectionStatus {
    pub fn connected() -> Self {
        Self {
            success: true,
            message: Some("connection to the store established".to_string()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self { success: false, message: None, error: Some(error.into()) }
    }
}

/// Connectivity check service
pub struct ConnectionService {
    health: Arc<dyn StoreHealth>,
    timeout: Duration,
}

impl ConnectionService {
    pub fn new(health: Arc<dyn StoreHealth>) -> Self {
        Self { health, timeout: CONNECTION_PROBE_TIMEOUT }
    }

    /// Override the probe timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Ping the store, giving up after the probe timeout. Never fails.
    pub async fn check(&self) -> ConnectionStatus {
        match tokio::time::timeout(self.timeout, self.health.ping()).await {
            Ok(Ok(())) => {
                info!("Store connection check succeeded");
                ConnectionStatus::connected()
            }
            Ok(Err(e)) => {
                error!(error = %e, "Store connection check failed");
                ConnectionStatus::failed(e.message())
            }
            Err(_) => {
                error!(timeout_ms = self.timeout.as_millis() as u64, "Store connection check timed out");
                ConnectionStatus::failed("timeout connecting to the store")
            }
        }
    }
}
