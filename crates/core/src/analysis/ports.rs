//! Port interfaces for page analysis
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use async_trait::async_trait;
use a11ylens_domain::{NewSiteAnalysis, Result, SiteAnalysis, TagCounts};
use url::Url;

/// Trait for downloading the markup of a page
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the body of `url` as text
    async fn fetch(&self, url: &Url) -> Result<String>;
}

/// Trait for counting tracked elements in markup
pub trait TagCounter: Send + Sync {
    /// Count the tracked elements in `markup`
    fn count(&self, markup: &str) -> Result<TagCounts>;
}

/// Trait for persisting site analyses
#[async_trait]
pub trait AnalysisRepository: Send + Sync {
    /// Insert an analysis and return its store-assigned id
    async fn insert_analysis(&self, analysis: NewSiteAnalysis) -> Result<i64>;

    /// Load an analysis by id
    ///
    /// Returns `A11yError::NotFound` when no row matches.
    async fn get_analysis(&self, id: i64) -> Result<SiteAnalysis>;
}
