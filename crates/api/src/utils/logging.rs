use std::time::{Duration, Instant};

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Environment variable selecting JSON log output
pub const ENV_LOG_JSON: &str = "A11YLENS_LOG_JSON";

const DEFAULT_FILTER: &str = "info";

/// Install the global tracing subscriber.
///
/// `RUST_LOG` overrides the default `info` filter. Setting
/// `A11YLENS_LOG_JSON=true` switches to JSON lines. Calling this twice is
/// harmless; the second install is ignored.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let json = std::env::var(ENV_LOG_JSON).map(|v| v.eq_ignore_ascii_case("true")).unwrap_or(false);

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    let installed = if json {
        builder.json().with_current_span(false).try_init()
    } else {
        builder.try_init()
    };

    if installed.is_ok() {
        info!(json, "tracing initialised");
    }
}

/// Log the outcome of a route with structured fields.
///
/// `route` should be the matched path template, never the raw URI, so query
/// strings stay out of the logs.
#[inline]
pub fn log_route_execution(method: &str, route: &str, status: u16, elapsed: Duration) {
    let duration_ms = elapsed.as_millis() as u64;

    if status < 500 {
        info!(method, route, status, duration_ms, "route_execution");
    } else {
        warn!(method, route, status, duration_ms, "route_execution_failure");
    }
}

/// Middleware timing every request and logging its status
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let route = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    log_route_execution(&method, &route, response.status().as_u16(), start.elapsed());
    response
}
