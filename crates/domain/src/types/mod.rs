//! Domain types and models
//!
//! Row shapes mirror the store tables (`site_analyses`, `quiz_questions`,
//! `quiz_results`) and serialize with their snake_case column names.

pub mod analysis;
pub mod quiz;
mod timestamp;

pub use analysis::{AnalysisSource, NewSiteAnalysis, SiteAnalysis, TagCounts};
pub use quiz::{AnswerKey, NewQuizResult, QuizQuestion, QuizResult};
