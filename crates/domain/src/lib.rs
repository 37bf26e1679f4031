//! # A11y Lens Domain
//!
//! Business domain types and models for A11y Lens.
//!
//! This crate contains:
//! - Tag counts, stored analyses and quiz records
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other A11y Lens crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
