//! Shared fixtures for route tests: fake adapters and request helpers
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use a11ylens_api::{router, Adapters, AppContext};
use a11ylens_core::{AnalysisRepository, PageFetcher, QuizRepository, StoreHealth};
use a11ylens_domain::{
    A11yError, AnswerKey, Config, NewQuizResult, NewSiteAnalysis, QuizQuestion, QuizResult,
    Result as DomainResult, RetrySettings, SiteAnalysis,
};
use a11ylens_infra::ScraperTagCounter;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;
use url::Url;

/// Store fake implementing every store port
///
/// Store calls consume a script of outcomes in order, whichever port they
/// hit: `fail_next` queues an error, `pass_next` a normal call. Once the
/// script is empty every call behaves normally.
#[derive(Default)]
pub struct MemoryStore {
    analyses: Mutex<Vec<SiteAnalysis>>,
    questions: Mutex<Vec<QuizQuestion>>,
    results: Mutex<Vec<QuizResult>>,
    script: Mutex<VecDeque<Option<A11yError>>>,
    calls: AtomicU32,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_questions(questions: Vec<QuizQuestion>) -> Arc<Self> {
        let store = Self::default();
        *store.questions.lock().unwrap() = questions;
        Arc::new(store)
    }

    pub fn fail_next(&self, error: A11yError) {
        self.script.lock().unwrap().push_back(Some(error));
    }

    pub fn pass_next(&self) {
        self.script.lock().unwrap().push_back(None);
    }

    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn analyses(&self) -> Vec<SiteAnalysis> {
        self.analyses.lock().unwrap().clone()
    }

    pub fn results(&self) -> Vec<QuizResult> {
        self.results.lock().unwrap().clone()
    }

    fn enter(&self) -> DomainResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.script.lock().unwrap().pop_front().flatten() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl AnalysisRepository for MemoryStore {
    async fn insert_analysis(&self, analysis: NewSiteAnalysis) -> DomainResult<i64> {
        self.enter()?;
        let mut rows = self.analyses.lock().unwrap();
        let id = rows.len() as i64 + 1;
        rows.push(SiteAnalysis::from_new(id, analysis));
        Ok(id)
    }

    async fn get_analysis(&self, id: i64) -> DomainResult<SiteAnalysis> {
        self.enter()?;
        self.analyses
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.id == id)
            .cloned()
            .ok_or_else(|| A11yError::NotFound(format!("analysis {id}")))
    }
}

#[async_trait::async_trait]
impl QuizRepository for MemoryStore {
    async fn list_questions(&self) -> DomainResult<Vec<QuizQuestion>> {
        self.enter()?;
        Ok(self.questions.lock().unwrap().clone())
    }

    async fn list_answer_keys(&self) -> DomainResult<Vec<AnswerKey>> {
        self.enter()?;
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .map(|q| AnswerKey { id: q.id, correct_answer: q.correct_answer })
            .collect())
    }

    async fn insert_result(&self, result: NewQuizResult) -> DomainResult<QuizResult> {
        self.enter()?;
        let mut rows = self.results.lock().unwrap();
        let saved = QuizResult::from_new(rows.len() as i64 + 500, result);
        rows.push(saved.clone());
        Ok(saved)
    }
}

#[async_trait::async_trait]
impl StoreHealth for MemoryStore {
    async fn ping(&self) -> DomainResult<()> {
        self.enter()
    }
}

/// Fetcher serving one canned page, or one canned error
pub struct CannedFetcher {
    page: DomainResult<String>,
    pub requested: Mutex<Vec<String>>,
}

impl CannedFetcher {
    pub fn page(html: &str) -> Arc<Self> {
        Arc::new(Self { page: Ok(html.to_string()), requested: Mutex::default() })
    }

    pub fn failing(error: A11yError) -> Arc<Self> {
        Arc::new(Self { page: Err(error), requested: Mutex::default() })
    }
}

#[async_trait::async_trait]
impl PageFetcher for CannedFetcher {
    async fn fetch(&self, url: &Url) -> DomainResult<String> {
        self.requested.lock().unwrap().push(url.to_string());
        self.page.clone()
    }
}

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

/// Router over the fakes, with a zero-delay retry policy
pub fn app(store: Arc<MemoryStore>, fetcher: Arc<CannedFetcher>) -> Router {
    let config = Config {
        retry: RetrySettings { max_attempts: 3, initial_delay_ms: 0 },
        ..Config::default()
    };
    let adapters = Adapters {
        fetcher,
        counter: Arc::new(ScraperTagCounter::new()),
        analyses: store.clone(),
        quiz: store.clone(),
        health: store,
    };
    let ctx = AppContext::with_adapters(config, adapters).expect("context");
    router(Arc::new(ctx))
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("router response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("body bytes");
    let body = serde_json::from_slice(&bytes).expect("json body");
    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request")
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}
