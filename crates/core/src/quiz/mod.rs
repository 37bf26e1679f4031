//! Accessibility quiz personalized with analysis counts

pub mod ports;
pub mod service;

pub use ports::QuizRepository;
pub use service::{QuizLoadError, QuizService, QuizSubmission};
