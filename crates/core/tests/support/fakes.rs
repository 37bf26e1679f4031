//! In-memory port implementations
//!
//! Each fake pops scripted errors from a queue before falling back to its
//! normal behaviour, so tests can model "fails twice, then succeeds".

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use a11ylens_core::{AnalysisRepository, PageFetcher, QuizRepository, StoreHealth, TagCounter};
use a11ylens_domain::{
    A11yError, AnswerKey, NewQuizResult, NewSiteAnalysis, QuizQuestion, QuizResult,
    Result as DomainResult, SiteAnalysis, TagCounts,
};
use url::Url;

#[derive(Default)]
struct FailureScript {
    errors: Mutex<VecDeque<A11yError>>,
}

impl FailureScript {
    fn push(&self, error: A11yError) {
        self.errors.lock().unwrap().push_back(error);
    }

    fn next(&self) -> DomainResult<()> {
        match self.errors.lock().unwrap().pop_front() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/* -------------------------------------------------------------------------- */
/* Analysis store */
/* -------------------------------------------------------------------------- */

/// In-memory `AnalysisRepository` assigning ids from 1
#[derive(Default)]
pub struct InMemoryAnalyses {
    rows: Mutex<Vec<SiteAnalysis>>,
    insert_failures: FailureScript,
    get_failures: FailureScript,
    pub insert_calls: AtomicU32,
    pub get_calls: AtomicU32,
}

impl InMemoryAnalyses {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Seed a stored row and return its id
    pub fn seed(&self, counts: TagCounts) -> i64 {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as i64 + 1;
        rows.push(SiteAnalysis::from_new(
            id,
            NewSiteAnalysis::new(
                &a11ylens_domain::AnalysisSource::Url("https://seeded.example/".into()),
                counts,
                chrono::Utc::now(),
            ),
        ));
        id
    }

    pub fn fail_insert_with(&self, error: A11yError) {
        self.insert_failures.push(error);
    }

    pub fn fail_get_with(&self, error: A11yError) {
        self.get_failures.push(error);
    }

    pub fn rows(&self) -> Vec<SiteAnalysis> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnalysisRepository for InMemoryAnalyses {
    async fn insert_analysis(&self, analysis: NewSiteAnalysis) -> DomainResult<i64> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        self.insert_failures.next()?;
        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as i64 + 1;
        rows.push(SiteAnalysis::from_new(id, analysis));
        Ok(id)
    }

    async fn get_analysis(&self, id: i64) -> DomainResult<SiteAnalysis> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.get_failures.next()?;
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.id == id)
            .cloned()
            .ok_or_else(|| A11yError::NotFound(format!("analysis {id}")))
    }
}

/* -------------------------------------------------------------------------- */
/* Quiz store */
/* -------------------------------------------------------------------------- */

/// In-memory `QuizRepository`
#[derive(Default)]
pub struct InMemoryQuiz {
    questions: Mutex<Vec<QuizQuestion>>,
    results: Mutex<Vec<QuizResult>>,
    list_failures: FailureScript,
    key_failures: FailureScript,
    insert_failures: FailureScript,
    pub list_calls: AtomicU32,
    pub key_calls: AtomicU32,
    pub insert_calls: AtomicU32,
}

impl InMemoryQuiz {
    pub fn with_questions(questions: Vec<QuizQuestion>) -> Arc<Self> {
        let quiz = Self::default();
        *quiz.questions.lock().unwrap() = questions;
        Arc::new(quiz)
    }

    pub fn fail_list_with(&self, error: A11yError) {
        self.list_failures.push(error);
    }

    pub fn fail_keys_with(&self, error: A11yError) {
        self.key_failures.push(error);
    }

    pub fn fail_insert_with(&self, error: A11yError) {
        self.insert_failures.push(error);
    }

    pub fn results(&self) -> Vec<QuizResult> {
        self.results.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuiz {
    async fn list_questions(&self) -> DomainResult<Vec<QuizQuestion>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.list_failures.next()?;
        let mut questions = self.questions.lock().unwrap().clone();
        questions.sort_by_key(|q| q.id);
        Ok(questions)
    }

    async fn list_answer_keys(&self) -> DomainResult<Vec<AnswerKey>> {
        self.key_calls.fetch_add(1, Ordering::SeqCst);
        self.key_failures.next()?;
        let mut keys: Vec<AnswerKey> = self
            .questions
            .lock()
            .unwrap()
            .iter()
            .map(|q| AnswerKey { id: q.id, correct_answer: q.correct_answer })
            .collect();
        keys.sort_by_key(|k| k.id);
        Ok(keys)
    }

    async fn insert_result(&self, result: NewQuizResult) -> DomainResult<QuizResult> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        self.insert_failures.next()?;
        let mut results = self.results.lock().unwrap();
        let saved = QuizResult::from_new(results.len() as i64 + 100, result);
        results.push(saved.clone());
        Ok(saved)
    }
}

/// Question fixture with the given id, text and correct option
pub fn question(id: i64, text: &str, correct_answer: i64) -> QuizQuestion {
    QuizQuestion {
        id,
        question: text.to_string(),
        options: serde_json::json!(["0", "1", "2", "3"]),
        correct_answer,
        tr_model_principle: Some("perceivable".to_string()),
        created_at: None,
    }
}

/* -------------------------------------------------------------------------- */
/* Fetcher and counter */
/* -------------------------------------------------------------------------- */

/// `PageFetcher` returning fixed markup and recording requested URLs
pub struct StaticFetcher {
    response: DomainResult<String>,
    pub requested: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn ok(markup: &str) -> Arc<Self> {
        Arc::new(Self { response: Ok(markup.to_string()), requested: Mutex::new(Vec::new()) })
    }

    pub fn failing(error: A11yError) -> Arc<Self> {
        Arc::new(Self { response: Err(error), requested: Mutex::new(Vec::new()) })
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for StaticFetcher {
    async fn fetch(&self, url: &Url) -> DomainResult<String> {
        self.requested.lock().unwrap().push(url.to_string());
        self.response.clone()
    }
}

/// `TagCounter` that counts opening tags by plain substring search
pub struct NaiveCounter;

impl TagCounter for NaiveCounter {
    fn count(&self, markup: &str) -> DomainResult<TagCounts> {
        let n = |tag: &str| {
            markup.matches(&format!("<{tag} ")).count() as u32
                + markup.matches(&format!("<{tag}>")).count() as u32
        };
        Ok(TagCounts {
            a: n("a"),
            button: n("button"),
            select: n("select"),
            input: n("input"),
            img: n("img"),
            video: n("video"),
        })
    }
}

/* -------------------------------------------------------------------------- */
/* Store health */
/* -------------------------------------------------------------------------- */

/// `StoreHealth` with a fixed answer and optional latency
pub struct ScriptedHealth {
    result: DomainResult<()>,
    latency: Duration,
}

impl ScriptedHealth {
    pub fn healthy() -> Arc<Self> {
        Arc::new(Self { result: Ok(()), latency: Duration::ZERO })
    }

    pub fn failing(error: A11yError) -> Arc<Self> {
        Arc::new(Self { result: Err(error), latency: Duration::ZERO })
    }

    pub fn slow(latency: Duration) -> Arc<Self> {
        Arc::new(Self { result: Ok(()), latency })
    }
}

#[async_trait]
impl StoreHealth for ScriptedHealth {
    async fn ping(&self) -> DomainResult<()> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.result.clone()
    }
}
