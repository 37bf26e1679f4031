//! Stand-in store used when credentials are missing

use a11ylens_core::{AnalysisRepository, QuizRepository, StoreHealth};
use a11ylens_domain::{
    A11yError, AnswerKey, NewQuizResult, NewSiteAnalysis, QuizQuestion, QuizResult, Result,
    SiteAnalysis,
};
use async_trait::async_trait;

const NOT_CONFIGURED: &str = "store credentials are not configured";

/// Every operation fails with a terminal configuration error, so analyses
/// still run and simply come back without an id.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredStore;

fn not_configured<T>() -> Result<T> {
    Err(A11yError::Config(NOT_CONFIGURED.to_string()))
}

#[async_trait]
impl AnalysisRepository for UnconfiguredStore {
    async fn insert_analysis(&self, _analysis: NewSiteAnalysis) -> Result<i64> {
        not_configured()
    }

    async fn get_analysis(&self, _id: i64) -> Result<SiteAnalysis> {
        not_configured()
    }
}

#[async_trait]
impl QuizRepository for UnconfiguredStore {
    async fn list_questions(&self) -> Result<Vec<QuizQuestion>> {
        not_configured()
    }

    async fn list_answer_keys(&self) -> Result<Vec<AnswerKey>> {
        not_configured()
    }

    async fn insert_result(&self, _result: NewQuizResult) -> Result<QuizResult> {
        not_configured()
    }
}

#[async_trait]
impl StoreHealth for UnconfiguredStore {
    async fn ping(&self) -> Result<()> {
        not_configured()
    }
}
