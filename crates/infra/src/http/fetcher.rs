//! Page fetcher that presents itself as a desktop browser

use a11ylens_core::PageFetcher;
use a11ylens_domain::constants::{BROWSER_ACCEPT, BROWSER_ACCEPT_LANGUAGE};
use a11ylens_domain::{A11yError, FetcherConfig, Result};
use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::Method;
use tracing::{debug, warn};
use url::Url;

use super::client::HttpClient;
use crate::errors::InfraError;

/// `PageFetcher` over HTTP with browser-like headers
#[derive(Clone, Debug)]
pub struct HttpPageFetcher {
    http: HttpClient,
}

impl HttpPageFetcher {
    pub fn new(config: &FetcherConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static(BROWSER_ACCEPT));
        headers.insert(header::ACCEPT_LANGUAGE, HeaderValue::from_static(BROWSER_ACCEPT_LANGUAGE));
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));

        let http = HttpClient::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()?;

        Ok(Self { http })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &Url) -> Result<String> {
        let response = self.http.send(self.http.request(Method::GET, url.clone())).await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "Page request was not successful");
            let reason = status.canonical_reason().unwrap_or("");
            let message = format!("failed to access URL: {} {}", status.as_u16(), reason);
            return Err(A11yError::Fetch(message.trim_end().to_string()));
        }

        let body = response.text().await.map_err(|err| A11yError::from(InfraError::from(err)))?;
        debug!(%url, bytes = body.len(), "Fetched page");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn fetcher() -> HttpPageFetcher {
        HttpPageFetcher::new(&FetcherConfig::default()).expect("fetcher")
    }

    // Multi-valued headers are compared on the recorded request: wiremock's
    // `header` matcher splits values on commas.
    #[tokio::test]
    async fn returns_body_and_sends_browser_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<a href=\"/\">x</a>"))
            .expect(1)
            .mount(&server)
            .await;

        let url = Url::parse(&format!("{}/page", server.uri())).unwrap();
        let body = fetcher().fetch(&url).await.expect("body");

        assert_eq!(body, "<a href=\"/\">x</a>");
        let requests = server.received_requests().await.unwrap();
        let headers = &requests[0].headers;
        let value = |name: &str| headers.get(name).unwrap().to_str().unwrap().to_string();
        assert_eq!(value("accept-language"), BROWSER_ACCEPT_LANGUAGE);
        assert_eq!(value("accept"), BROWSER_ACCEPT);
        assert_eq!(value("cache-control"), "no-cache");
        assert_eq!(value("pragma"), "no-cache");
        assert!(value("user-agent").starts_with("Mozilla/5.0"));
    }

    #[tokio::test]
    async fn non_success_status_is_a_fetch_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let url = Url::parse(&server.uri()).unwrap();
        let err = fetcher().fetch(&url).await.unwrap_err();

        assert_eq!(err, A11yError::Fetch("failed to access URL: 403 Forbidden".into()));
    }
}
