//! Conversions from external infrastructure errors into domain errors.
//!
//! Transport failures keep one of the lowercase words `timeout`,
//! `connection` or `network` in their message so the retry executor treats
//! them as transient.

use a11ylens_domain::A11yError;
use reqwest::{Error as HttpError, StatusCode};
use serde::Deserialize;
use url::ParseError as UrlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub A11yError);

impl From<InfraError> for A11yError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<A11yError> for InfraError {
    fn from(value: A11yError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoA11yError {
    fn into_a11y(self) -> A11yError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → A11yError */
/* -------------------------------------------------------------------------- */

impl IntoA11yError for HttpError {
    fn into_a11y(self) -> A11yError {
        if self.is_timeout() {
            return A11yError::Network(format!("request timeout: {self}"));
        }

        if self.is_connect() {
            return A11yError::Network(format!("connection failure: {self}"));
        }

        if self.is_decode() {
            return A11yError::Database(format!("invalid response body: {self}"));
        }

        if self.is_builder() {
            return A11yError::Config(format!("invalid request: {self}"));
        }

        if let Some(status) = self.status() {
            return status_error(status, None);
        }

        A11yError::Network(format!("network error: {self}"))
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_a11y())
    }
}

/* -------------------------------------------------------------------------- */
/* url::ParseError → A11yError */
/* -------------------------------------------------------------------------- */

impl IntoA11yError for UrlError {
    fn into_a11y(self) -> A11yError {
        A11yError::Config(format!("invalid store URL: {self}"))
    }
}

impl From<UrlError> for InfraError {
    fn from(value: UrlError) -> Self {
        InfraError(value.into_a11y())
    }
}

/* -------------------------------------------------------------------------- */
/* PostgREST error body → A11yError */
/* -------------------------------------------------------------------------- */

/// Error body returned by PostgREST on non-2xx responses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostgrestError {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

/// Zero rows for a single-object request
pub const PGRST_NO_ROWS: &str = "PGRST116";

/// Map a failed store response to a domain error
///
/// `body` is the raw response text; when it is not a PostgREST error object
/// the status line is used as the message.
pub fn store_error(status: StatusCode, body: &str) -> A11yError {
    let parsed: Option<PostgrestError> = serde_json::from_str(body).ok();
    status_error(status, parsed)
}

fn status_error(status: StatusCode, body: Option<PostgrestError>) -> A11yError {
    let status_line =
        format!("HTTP {} {}", status.as_u16(), status.canonical_reason().unwrap_or("unknown status"));
    let body = body.filter(|b| !b.message.is_empty());
    let no_rows = body.as_ref().and_then(|b| b.code.as_deref()) == Some(PGRST_NO_ROWS);
    let message = body.map(|b| b.message).unwrap_or(status_line);

    if no_rows || status == StatusCode::NOT_FOUND {
        return A11yError::NotFound(message);
    }

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            A11yError::Config(format!("store rejected credentials: {message}"))
        }
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            A11yError::Network(format!("store timeout: {message}"))
        }
        StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE => {
            A11yError::Network(format!("store connection unavailable: {message}"))
        }
        _ => A11yError::Database(message),
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
