//! A11y Lens - accessibility tag analysis service
//!
//! Main entry point for the HTTP server.

use std::sync::Arc;

use a11ylens_api::utils::logging::init_tracing;
use a11ylens_api::{router, AppContext};
use a11ylens_infra::config;
use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env first so RUST_LOG and A11YLENS_LOG_JSON from it apply to tracing
    let dotenv = dotenvy::dotenv();

    init_tracing();

    match dotenv {
        Ok(path) => info!(path = %path.display(), "Loaded .env"),
        Err(e) => warn!(error = %e, "Could not load .env file"),
    }

    let config = config::load().context("failed to load configuration")?;
    let bind_addr = config.server.bind_addr.clone();

    let ctx = Arc::new(AppContext::new(config).context("failed to build application context")?);
    let app = router(ctx);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    info!(addr = %bind_addr, "A11y Lens listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("A11y Lens stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
