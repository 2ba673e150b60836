// src/server/routes.rs

use std::time::Duration;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router, middleware};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;
use tracing::info;

use crate::errors::JobsortError;
use crate::job::{Job, OutputMode, order_job};
use crate::server::middleware::{request_id, request_logger};
use crate::server::{ApiError, AppState};

/// Build the application router with its middleware stack.
///
/// Outermost first: request-id span, request logger, timeout.
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/job", post(job_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id))
                .layer(middleware::from_fn(request_logger))
                .layer(TimeoutLayer::new(request_timeout)),
        )
}

#[derive(Debug, Default, Deserialize)]
pub struct JobQuery {
    /// `bash` for a script, anything else for JSON.
    #[serde(default)]
    pub mode: Option<String>,
}

/// POST /job - order a job's tasks and return the commands.
///
/// Ordering runs on the blocking pool so the timeout layer can still fire
/// while a large job is being sorted.
async fn job_handler(
    Query(query): Query<JobQuery>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let job = Job::from_json(&body)?;
    let commands = tokio::task::spawn_blocking(move || order_job(&job))
        .await
        .map_err(|e| JobsortError::Other(e.into()))??;

    let mode = OutputMode::negotiate(query.mode.as_deref());
    let rendered = mode.render(&commands)?;

    info!(?mode, commands = commands.len(), "response has been rendered");
    Ok(([(header::CONTENT_TYPE, mode.content_type())], rendered).into_response())
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub environment: String,
    pub region: String,
    pub image: String,
}

/// GET /health - liveness plus deployment metadata.
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.service.environment.clone(),
        region: state.service.region.clone(),
        image: format!("{}:{}", state.service.image_name, state.service.image_tag),
    })
}
