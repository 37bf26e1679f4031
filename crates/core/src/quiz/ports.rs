//! Port interfaces for the quiz

use async_trait::async_trait;
use a11ylens_domain::{AnswerKey, NewQuizResult, QuizQuestion, QuizResult, Result};

/// Trait for reading questions and storing quiz results
#[async_trait]
pub trait QuizRepository: Send + Sync {
    /// All questions, ordered by id
    async fn list_questions(&self) -> Result<Vec<QuizQuestion>>;

    /// Correct answers for every question, ordered by id
    async fn list_answer_keys(&self) -> Result<Vec<AnswerKey>>;

    /// Insert a graded submission
    async fn insert_result(&self, result: NewQuizResult) -> Result<QuizResult>;
}
