//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for A11y Lens
///
/// The retry executor classifies failures by their `Display` text, so
/// adapters that produce `Network` errors phrase the inner message with one of
/// the transient markers (`network`, `timeout`, `connection`).
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum A11yError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl A11yError {
    /// The inner message without the variant prefix
    pub fn message(&self) -> &str {
        match self {
            Self::Database(m)
            | Self::Config(m)
            | Self::Network(m)
            | Self::Fetch(m)
            | Self::NotFound(m)
            | Self::InvalidInput(m)
            | Self::Internal(m) => m,
        }
    }

    /// Stable label suitable for logging
    pub fn label(&self) -> &'static str {
        match self {
            Self::Database(_) => "database",
            Self::Config(_) => "config",
            Self::Network(_) => "network",
            Self::Fetch(_) => "fetch",
            Self::NotFound(_) => "not_found",
            Self::InvalidInput(_) => "invalid_input",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for A11y Lens operations
pub type Result<T> = std::result::Result<T, A11yError>;
