//! Quiz service - builds questions for an analysis and grades submissions

use std::sync::Arc;

use a11ylens_domain::{A11yError, AnswerKey, NewQuizResult, QuizQuestion, Result, TagCounts};
use chrono::Utc;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, instrument};

use super::ports::QuizRepository;
use crate::analysis::ports::AnalysisRepository;
use crate::retry::{default_store_retry, StoreRetry};

/// Outcome of a graded submission
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSubmission {
    /// Percentage of correct answers
    pub score: f64,
    /// Number of correct answers
    pub correct: u32,
    pub result_id: Option<i64>,
}

/// Failure while building a quiz, tagged with the read that failed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuizLoadError {
    #[error("failed to load analysis: {0}")]
    Analysis(#[source] A11yError),

    #[error("failed to load questions: {0}")]
    Questions(#[source] A11yError),
}

impl QuizLoadError {
    /// The store error behind the failure
    pub fn error(&self) -> &A11yError {
        match self {
            Self::Analysis(e) | Self::Questions(e) => e,
        }
    }
}

/// Quiz service
pub struct QuizService {
    analyses: Arc<dyn AnalysisRepository>,
    quiz: Arc<dyn QuizRepository>,
    retry: StoreRetry,
}

impl QuizService {
    pub fn new(analyses: Arc<dyn AnalysisRepository>, quiz: Arc<dyn QuizRepository>) -> Self {
        Self { analyses, quiz, retry: default_store_retry() }
    }

    /// Replace the retry executor used for store calls
    pub fn with_retry(mut self, retry: StoreRetry) -> Self {
        self.retry = retry;
        self
    }

    /// Questions personalized with the counts of a stored analysis.
    ///
    /// Both reads go through the retry executor.
    ///
    /// # Errors
    /// Returns the store error of whichever read failed, tagged with that
    /// read.
    #[instrument(skip(self))]
    pub async fn quiz_for(
        &self,
        analysis_id: i64,
    ) -> std::result::Result<Vec<QuizQuestion>, QuizLoadError> {
        let counts = self.load_counts(analysis_id).await.map_err(|e| {
            error!(error = %e, error_type = e.label(), "Failed to load analysis");
            QuizLoadError::Analysis(e)
        })?;
        let questions = self.retry.execute(|| self.quiz.list_questions()).await.map_err(|e| {
            error!(error = %e, error_type = e.label(), "Failed to load questions");
            QuizLoadError::Questions(e)
        })?;
        Ok(questions.into_iter().map(|q| personalize(q, &counts)).collect())
    }

    async fn load_counts(&self, analysis_id: i64) -> Result<TagCounts> {
        let analysis = self.retry.execute(|| self.analyses.get_analysis(analysis_id)).await?;
        Ok(analysis.tag_counts())
    }

    /// Grade `answers` against the stored answer keys and save the result.
    ///
    /// # Errors
    /// Returns `InvalidInput` for an empty answer list, otherwise the store
    /// error from loading keys or inserting the result.
    #[instrument(skip(self, answers), fields(answer_count = answers.len()))]
    pub async fn submit(&self, analysis_id: i64, answers: Vec<Option<i64>>) -> Result<QuizSubmission> {
        if answers.is_empty() {
            return Err(A11yError::InvalidInput("answers are required".to_string()));
        }

        let keys = self.retry.execute(|| self.quiz.list_answer_keys()).await?;
        let (correct, score) = grade(&keys, &answers);

        let row = NewQuizResult {
            analysis_id: Some(analysis_id),
            score,
            answers,
            completed_at: Utc::now(),
        };
        let saved = self.retry.execute(|| self.quiz.insert_result(row.clone())).await?;

        info!(result_id = saved.id, correct, score, "Quiz result saved");
        Ok(QuizSubmission { score, correct, result_id: Some(saved.id) })
    }
}

/// Replace the first occurrence of each placeholder with its count
fn personalize(mut question: QuizQuestion, counts: &TagCounts) -> QuizQuestion {
    for (token, value) in counts.placeholders() {
        if question.question.contains(token) {
            question.question = question.question.replacen(token, &value.to_string(), 1);
        }
    }
    question
}

/// Count positional matches and convert to a percentage
fn grade(keys: &[AnswerKey], answers: &[Option<i64>]) -> (u32, f64) {
    let correct = keys
        .iter()
        .enumerate()
        .filter(|(i, key)| answers.get(*i).copied().flatten() == Some(key.correct_answer))
        .count() as u32;

    if keys.is_empty() {
        return (0, 0.0);
    }
    (correct, f64::from(correct) / keys.len() as f64 * 100.0)
}
