// src/server/error.rs

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

use crate::errors::{ErrorCategory, JobsortError};

/// Handler error: a [`JobsortError`] rendered as a JSON body.
#[derive(Debug)]
pub struct ApiError(pub JobsortError);

impl From<JobsortError> for ApiError {
    fn from(err: JobsortError) -> Self {
        Self(err)
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "Category")]
    pub category: &'static str,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        if self.0.category().is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    /// User-facing message, with a hint for failures the caller can fix.
    pub fn message(&self) -> String {
        match self.0.category() {
            ErrorCategory::Cycle => {
                format!("Please evaluate tasks. Processing feedback: {}", self.0)
            }
            ErrorCategory::VertexNotFound => format!(
                "Please evaluate required tasks as one of the defined ones does not exist. \
                 Processing feedback: {}",
                self.0
            ),
            _ => self.0.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let category = self.0.category();
        error!(category = %category, error = %self.0, "job request failed");

        let body = ErrorResponse {
            message: self.message(),
            category: category.as_str(),
        };

        (self.status(), Json(body)).into_response()
    }
}
