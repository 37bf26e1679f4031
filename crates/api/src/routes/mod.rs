//! HTTP routes
//!
//! Every response is JSON. Successful bodies carry `"success": true` next to
//! their payload; failures carry a single `"error"` message.

mod analyze;
mod connection;
mod error;
mod quiz;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{middleware, Router};
use serde::Serialize;

pub use error::ApiError;

use crate::context::AppContext;
use crate::utils::logging::log_requests;

/// Build the application router
pub fn router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze::analyze))
        .route("/api/quiz", get(quiz::questions).post(quiz::submit))
        .route("/api/check-connection", get(connection::check_connection))
        .layer(middleware::from_fn(log_requests))
        .with_state(ctx)
}

/// `{"success": true, ...payload}`
#[derive(Debug, Serialize)]
pub(crate) struct Success<T> {
    success: bool,
    #[serde(flatten)]
    payload: T,
}

impl<T> Success<T> {
    pub(crate) fn new(payload: T) -> Self {
        Self { success: true, payload }
    }
}
