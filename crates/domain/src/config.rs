//! Application configuration
//!
//! Every section has serde defaults, so a config file only needs the values it
//! overrides.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    APPLICATION_NAME, BROWSER_USER_AGENT, DEFAULT_BIND_ADDR, DEFAULT_FETCH_TIMEOUT,
    DEFAULT_STORE_SCHEMA, DEFAULT_STORE_TIMEOUT,
};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub fetcher: FetcherConfig,
    #[serde(default)]
    pub retry: RetrySettings,
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: DEFAULT_BIND_ADDR.to_string() }
    }
}

/// REST store (PostgREST-compatible) settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Base URL, e.g. `https://project.supabase.co`
    pub url: Option<String>,
    pub anon_key: Option<String>,
    pub schema: String,
    pub application_name: String,
    pub request_timeout_secs: u64,
}

impl StoreConfig {
    /// Both the URL and the key are present and non-empty
    pub fn is_configured(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        present(&self.url) && present(&self.anon_key)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: None,
            anon_key: None,
            schema: DEFAULT_STORE_SCHEMA.to_string(),
            application_name: APPLICATION_NAME.to_string(),
            request_timeout_secs: DEFAULT_STORE_TIMEOUT.as_secs(),
        }
    }
}

/// Page fetcher settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl FetcherConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: DEFAULT_FETCH_TIMEOUT.as_secs(),
            user_agent: BROWSER_USER_AGENT.to_string(),
        }
    }
}

/// Retry budget for store operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrySettings {
    pub max_attempts: u32,
    pub initial_delay_ms: u64,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self { max_attempts: 3, initial_delay_ms: 1000 }
    }
}
