//! Quiz questions and submitted results

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored `quiz_questions` row
///
/// `question` may contain placeholder tokens that are replaced with the counts
/// of a specific analysis before it is shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: i64,
    pub question: String,
    pub options: serde_json::Value,
    pub correct_answer: i64,
    #[serde(default)]
    pub tr_model_principle: Option<String>,
    #[serde(default, deserialize_with = "super::timestamp::option::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Question id with its correct option index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerKey {
    pub id: i64,
    pub correct_answer: i64,
}

/// Row to insert into `quiz_results`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewQuizResult {
    pub analysis_id: Option<i64>,
    /// Percentage of correct answers, 0 to 100
    pub score: f64,
    /// Answers as submitted; unanswered positions are `None`
    pub answers: Vec<Option<i64>>,
    pub completed_at: DateTime<Utc>,
}

/// Stored `quiz_results` row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResult {
    pub id: i64,
    pub analysis_id: Option<i64>,
    pub score: f64,
    pub answers: Vec<Option<i64>>,
    #[serde(deserialize_with = "super::timestamp::deserialize")]
    pub completed_at: DateTime<Utc>,
}

impl QuizResult {
    pub fn from_new(id: i64, row: NewQuizResult) -> Self {
        Self {
            id,
            analysis_id: row.analysis_id,
            score: row.score,
            answers: row.answers,
            completed_at: row.completed_at,
        }
    }
}
