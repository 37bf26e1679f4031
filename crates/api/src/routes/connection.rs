use std::sync::Arc;

use a11ylens_core::ConnectionStatus;
use axum::extract::State;
use axum::Json;

use crate::context::AppContext;

/// `GET /api/check-connection`
///
/// Always answers 200; the outcome is in the body.
pub(crate) async fn check_connection(State(ctx): State<Arc<AppContext>>) -> Json<ConnectionStatus> {
    Json(ctx.connection.check().await)
}
