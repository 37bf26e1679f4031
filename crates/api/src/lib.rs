//! # A11y Lens API
//!
//! HTTP application layer - routes and main entry point.
//!
//! This crate contains:
//! - axum routes (JSON in, JSON out)
//! - Application context (dependency injection)
//! - Tracing setup and request logging
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Serves `/api/analyze`, `/api/quiz` and `/api/check-connection`

pub mod context;
pub mod routes;
pub mod utils;

// Re-export for convenience
pub use context::{Adapters, AppContext};
pub use routes::{router, ApiError};
