//! Page analysis service - core business logic

use std::sync::Arc;

use a11ylens_domain::{AnalysisSource, NewSiteAnalysis, Result, TagCounts};
use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::ports::{AnalysisRepository, PageFetcher, TagCounter};
use super::normalize::normalize_url;
use crate::retry::{default_store_retry, StoreRetry};

/// What to analyse
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisRequest {
    /// A URL, possibly without a scheme
    Url(String),
    /// Markup supplied by the caller
    Markup(String),
}

/// Result of an analysis
///
/// `analysis_id` is `None` when the counts could not be persisted; `warning`
/// then carries the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub url: String,
    pub tag_counts: TagCounts,
    pub analysis_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Page analysis service
pub struct AnalysisService {
    fetcher: Arc<dyn PageFetcher>,
    counter: Arc<dyn TagCounter>,
    analyses: Arc<dyn AnalysisRepository>,
    retry: StoreRetry,
}

impl AnalysisService {
    /// Create a new analysis service with the default store retry policy
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        counter: Arc<dyn TagCounter>,
        analyses: Arc<dyn AnalysisRepository>,
    ) -> Self {
        Self { fetcher, counter, analyses, retry: default_store_retry() }
    }

    /// Replace the retry executor used for persistence
    pub fn with_retry(mut self, retry: StoreRetry) -> Self {
        self.retry = retry;
        self
    }

    /// Count the tracked elements of a page and try to persist the counts.
    ///
    /// # Errors
    /// URL validation, fetch and counting failures are returned as-is and
    /// nothing is stored. Persistence failures are not errors; they surface as
    /// [`AnalysisReport::warning`].
    pub async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisReport> {
        let (source, markup) = match request {
            AnalysisRequest::Url(input) => {
                let url = normalize_url(&input)?;
                debug!(url = %url, "Fetching page for analysis");
                let markup = self.fetcher.fetch(&url).await?;
                (AnalysisSource::Url(url.to_string()), markup)
            }
            AnalysisRequest::Markup(markup) => (AnalysisSource::Markup, markup),
        };

        let tag_counts = self.counter.count(&markup)?;
        info!(source = source.label(), total = tag_counts.total(), "Page analysed");

        let row = NewSiteAnalysis::new(&source, tag_counts, Utc::now());
        let (analysis_id, warning) =
            match self.retry.execute(|| self.analyses.insert_analysis(row.clone())).await {
                Ok(id) => (Some(id), None),
                Err(err) => {
                    warn!(error = %err, "Failed to save analysis, continuing without persistence");
                    (None, Some(format!("could not save to the database: {}", err.message())))
                }
            };

        Ok(AnalysisReport { url: source.label().to_string(), tag_counts, analysis_id, warning })
    }
}
