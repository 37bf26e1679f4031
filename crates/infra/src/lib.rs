//! # A11y Lens Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - PostgREST store client (analyses, quiz, health probe)
//! - HTTP client and browser-like page fetcher
//! - HTML element counting
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `a11ylens-core`
//! - Depends on `a11ylens-domain` and `a11ylens-core`
//! - Contains all "impure" code (network, files, parsing)

pub mod config;
pub mod errors;
pub mod http;
pub mod markup;
pub mod rest;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::{HttpClient, HttpPageFetcher};
pub use markup::ScraperTagCounter;
pub use rest::{RestStoreClient, UnconfiguredStore};
