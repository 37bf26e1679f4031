//! PostgREST store client
//!
//! Talks to a Supabase-compatible REST endpoint (`{base}/rest/v1/{table}`)
//! authenticated with the project's anon key.

use a11ylens_core::{AnalysisRepository, QuizRepository, StoreHealth};
use a11ylens_domain::{
    A11yError, AnswerKey, NewQuizResult, NewSiteAnalysis, QuizQuestion, QuizResult, Result,
    SiteAnalysis, StoreConfig,
};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, instrument};
use url::Url;

use crate::errors::{store_error, InfraError};
use crate::http::HttpClient;

const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

#[derive(Debug, Deserialize)]
struct IdRow {
    id: i64,
}

/// REST store client implementing the store ports
#[derive(Clone, Debug)]
pub struct RestStoreClient {
    http: HttpClient,
    rest_root: Url,
}

impl RestStoreClient {
    /// Build a client from store configuration.
    ///
    /// # Errors
    /// Returns `A11yError::Config` when the URL or key is missing, the URL
    /// does not parse, or a header value is invalid.
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let (base, key) = match (config.url.as_deref(), config.anon_key.as_deref()) {
            (Some(url), Some(key)) if config.is_configured() => (url.trim(), key.trim()),
            _ => return Err(A11yError::Config("store credentials are not configured".into())),
        };

        let rest_root = Url::parse(&format!("{}/rest/v1/", base.trim_end_matches('/')))
            .map_err(|e| A11yError::from(InfraError::from(e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static("apikey"), header_value(key)?);
        headers.insert(AUTHORIZATION, header_value(&format!("Bearer {key}"))?);
        headers.insert(
            HeaderName::from_static("x-application-name"),
            header_value(&config.application_name)?,
        );
        headers.insert(HeaderName::from_static("accept-profile"), header_value(&config.schema)?);
        headers.insert(HeaderName::from_static("content-profile"), header_value(&config.schema)?);

        let http = HttpClient::builder()
            .timeout(config.request_timeout())
            .default_headers(headers)
            .build()?;

        Ok(Self { http, rest_root })
    }

    fn endpoint(&self, table: &str, query: &[(&str, &str)]) -> Result<Url> {
        let mut url = self.rest_root.join(table).map_err(|e| A11yError::from(InfraError::from(e)))?;
        url.query_pairs_mut().extend_pairs(query);
        Ok(url)
    }

    /// Send and turn non-2xx responses into domain errors
    async fn execute(&self, builder: RequestBuilder) -> Result<Response> {
        let response = self.http.send(builder).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        debug!(%status, body = %body, "Store request failed");
        Err(store_error(status, &body))
    }

    async fn json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = self.execute(builder).await?;
        response.json::<T>().await.map_err(|e| A11yError::from(InfraError::from(e)))
    }

    async fn insert_returning<B, T>(&self, table: &str, select: &str, row: &B) -> Result<T>
    where
        B: serde::Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.endpoint(table, &[("select", select)])?;
        let builder = self
            .http
            .request(Method::POST, url)
            .header("prefer", "return=representation")
            .json(&[row]);

        let mut rows: Vec<T> = self.json(builder).await?;
        if rows.is_empty() {
            return Err(A11yError::Database(format!("insert into {table} returned no rows")));
        }
        Ok(rows.swap_remove(0))
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| A11yError::Config(format!("invalid store header value: {e}")))
}

#[async_trait]
impl AnalysisRepository for RestStoreClient {
    #[instrument(skip(self, analysis), fields(url = %analysis.url))]
    async fn insert_analysis(&self, analysis: NewSiteAnalysis) -> Result<i64> {
        let row: IdRow = self.insert_returning("site_analyses", "id", &analysis).await?;
        debug!(id = row.id, "Inserted site analysis");
        Ok(row.id)
    }

    #[instrument(skip(self))]
    async fn get_analysis(&self, id: i64) -> Result<SiteAnalysis> {
        let filter = format!("eq.{id}");
        let url = self.endpoint("site_analyses", &[("id", filter.as_str()), ("select", "*")])?;
        let builder = self.http.request(Method::GET, url).header(ACCEPT, SINGLE_OBJECT);
        self.json(builder).await
    }
}

#[async_trait]
impl QuizRepository for RestStoreClient {
    async fn list_questions(&self) -> Result<Vec<QuizQuestion>> {
        let url = self.endpoint("quiz_questions", &[("select", "*"), ("order", "id")])?;
        self.json(self.http.request(Method::GET, url)).await
    }

    async fn list_answer_keys(&self) -> Result<Vec<AnswerKey>> {
        let url =
            self.endpoint("quiz_questions", &[("select", "id,correct_answer"), ("order", "id")])?;
        self.json(self.http.request(Method::GET, url)).await
    }

    #[instrument(skip(self, result), fields(analysis_id = ?result.analysis_id))]
    async fn insert_result(&self, result: NewQuizResult) -> Result<QuizResult> {
        self.insert_returning("quiz_results", "*", &result).await
    }
}

#[async_trait]
impl StoreHealth for RestStoreClient {
    async fn ping(&self) -> Result<()> {
        let url = self.endpoint("site_analyses", &[("select", "count"), ("limit", "1")])?;
        self.execute(self.http.request(Method::GET, url)).await.map(|_| ())
    }
}
