//! # A11y Lens Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for the store, page fetching and
//!   markup counting
//! - Use cases: analysing a page, building and grading the quiz, checking
//!   store connectivity
//!
//! ## Architecture Principles
//! - Only depends on `a11ylens-common` and `a11ylens-domain`
//! - No database, HTTP, or markup parser code
//! - All external dependencies via traits
//! - Store calls go through the shared retry executor

pub mod analysis;
pub mod health;
pub mod quiz;
pub mod retry;

pub use analysis::ports::{AnalysisRepository, PageFetcher, TagCounter};
pub use analysis::{normalize_url, AnalysisReport, AnalysisRequest, AnalysisService};
pub use health::ports::StoreHealth;
pub use health::{ConnectionService, ConnectionStatus};
pub use quiz::ports::QuizRepository;
pub use quiz::{QuizLoadError, QuizService, QuizSubmission};
pub use retry::{store_retry, StoreRetry};
