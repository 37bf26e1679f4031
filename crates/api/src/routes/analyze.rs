use std::sync::Arc;

use a11ylens_core::{AnalysisReport, AnalysisRequest};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tracing::warn;

use super::{ApiError, Success};
use crate::context::AppContext;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AnalyzeBody {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    html: Option<String>,
}

impl AnalyzeBody {
    /// A non-blank `url` wins over `html`
    fn into_request(self) -> Option<AnalysisRequest> {
        let present = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        match (present(self.url), present(self.html)) {
            (Some(url), _) => Some(AnalysisRequest::Url(url)),
            (None, Some(html)) => Some(AnalysisRequest::Markup(html)),
            (None, None) => None,
        }
    }
}

/// `POST /api/analyze`
pub(crate) async fn analyze(
    State(ctx): State<Arc<AppContext>>,
    body: Result<Json<AnalyzeBody>, JsonRejection>,
) -> Result<Json<Success<AnalysisReport>>, ApiError> {
    let Json(body) = body?;
    let request = body.into_request().ok_or_else(|| ApiError::bad_request("URL is required"))?;

    let report = ctx.analysis.analyze(request).await.map_err(|e| {
        warn!(error = %e, error_type = e.label(), "Analysis failed");
        ApiError::bad_request(format!("error analyzing the site: {}", e.message()))
    })?;

    Ok(Json(Success::new(report)))
}
