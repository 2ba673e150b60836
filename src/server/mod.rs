// src/server/mod.rs

//! HTTP transport around the ordering pipeline.
//!
//! - [`routes`]: `POST /job` and `GET /health`.
//! - [`middleware`]: request-id span and request logging.
//! - [`error`]: maps [`crate::errors::JobsortError`] onto HTTP responses.

pub mod error;
pub mod middleware;
pub mod routes;

use std::time::Duration;

use anyhow::Result;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use crate::config::{ServerSection, ServiceSection};

pub use error::ApiError;
pub use routes::router;

/// Shared, read-only state handed to handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub service: ServiceSection,
}

/// Bind the configured address and serve until Ctrl-C or SIGTERM.
pub async fn serve(server: &ServerSection, state: AppState) -> Result<()> {
    let timeout = Duration::from_secs(server.request_timeout_secs);
    let app = router(state, timeout);

    let listener = TcpListener::bind((server.host.as_str(), server.port)).await?;
    info!(addr = %listener.local_addr()?, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("received Ctrl+C signal");
        }
        _ = wait_for_sigterm() => {
            info!("received SIGTERM signal");
        }
    }
    info!("starting graceful shutdown");
}

#[cfg(unix)]
async fn wait_for_sigterm() {
    use tokio::signal::unix::{SignalKind, signal};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to install SIGTERM handler");
            std::future::pending::<()>().await
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_sigterm() {
    std::future::pending::<()>().await
}
