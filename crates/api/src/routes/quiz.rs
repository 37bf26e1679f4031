use std::sync::Arc;

use a11ylens_core::{QuizLoadError, QuizSubmission};
use a11ylens_domain::{A11yError, QuizQuestion};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use super::{ApiError, Success};
use crate::context::AppContext;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuizQuery {
    analysis_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct QuizQuestions {
    questions: Vec<QuizQuestion>,
}

/// Analysis id as sent by clients: a JSON number, or the numeric string
/// taken from the quiz page's query string
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum AnalysisIdField {
    Number(i64),
    Text(String),
}

impl AnalysisIdField {
    fn resolve(&self) -> Result<i64, ApiError> {
        match self {
            Self::Number(id) => Ok(*id),
            Self::Text(raw) => parse_analysis_id(Some(raw.as_str())),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SubmitBody {
    analysis_id: Option<AnalysisIdField>,
    answers: Option<Vec<Option<i64>>>,
}

fn parse_analysis_id(raw: Option<&str>) -> Result<i64, ApiError> {
    let raw = raw
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::bad_request("analysis id is required"))?;

    raw.parse().map_err(|_| ApiError::bad_request("analysis id must be an integer"))
}

/// `GET /api/quiz?analysisId=`
pub(crate) async fn questions(
    State(ctx): State<Arc<AppContext>>,
    query: Result<Query<QuizQuery>, QueryRejection>,
) -> Result<Json<Success<QuizQuestions>>, ApiError> {
    let Query(query) = query?;
    let analysis_id = parse_analysis_id(query.analysis_id.as_deref())?;

    let questions = ctx.quiz.quiz_for(analysis_id).await.map_err(|e| match e {
        QuizLoadError::Analysis(_) => ApiError::internal("failed to load analysis"),
        QuizLoadError::Questions(_) => ApiError::internal("failed to load questions"),
    })?;

    Ok(Json(Success::new(QuizQuestions { questions })))
}

/// `POST /api/quiz`
pub(crate) async fn submit(
    State(ctx): State<Arc<AppContext>>,
    body: Result<Json<SubmitBody>, JsonRejection>,
) -> Result<Json<Success<QuizSubmission>>, ApiError> {
    let Json(body) = body?;
    let (Some(analysis_id), Some(answers)) = (body.analysis_id, body.answers) else {
        return Err(ApiError::bad_request("analysis id and answers are required"));
    };
    let analysis_id = analysis_id.resolve()?;

    match ctx.quiz.submit(analysis_id, answers).await {
        Ok(submission) => Ok(Json(Success::new(submission))),
        Err(A11yError::InvalidInput(message)) => Err(ApiError::bad_request(message)),
        Err(e) => {
            error!(analysis_id, error = %e, error_type = e.label(), "Failed to save quiz results");
            Err(ApiError::internal(format!("failed to save quiz results: {}", e.message())))
        }
    }
}
