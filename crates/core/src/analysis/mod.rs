//! Page analysis
//!
//! Normalizes the requested URL, fetches the page, counts tracked elements
//! and stores the counts.

pub mod ports;
pub mod service;
mod normalize;

pub use ports::{AnalysisRepository, PageFetcher, TagCounter};
pub use service::{AnalysisReport, AnalysisRequest, AnalysisService};
pub use normalize::normalize_url;
