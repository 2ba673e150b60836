// src/errors.rs

//! Crate-wide error type and the stable categories exposed at the boundary.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobsortError {
    #[error("vertex not found: {0}")]
    VertexNotFound(String),

    #[error("vertex is not defined")]
    VertexUndefined,

    #[error("there is cycle in the graph, cycle vertex: {0}")]
    GraphCycle(String),

    #[error("sorted tasks ({sorted}) do not match the command buffer size ({slots})")]
    CommandBufferSizeMismatch { sorted: usize, slots: usize },

    #[error("request task does not exist in the sorted ones: {0}")]
    RequestTaskNotFound(String),

    #[error("duplicate task name: {0}")]
    DuplicateTask(String),

    #[error("invalid job payload: {0}")]
    InvalidJob(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Stable error category, independent of the detail message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Cycle,
    VertexNotFound,
    VertexUndefined,
    BufferSizeMismatch,
    TaskNotFound,
    DuplicateTask,
    InvalidJob,
    Config,
    Internal,
}

impl ErrorCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCategory::Cycle => "cycle",
            ErrorCategory::VertexNotFound => "vertex_not_found",
            ErrorCategory::VertexUndefined => "vertex_undefined",
            ErrorCategory::BufferSizeMismatch => "buffer_size_mismatch",
            ErrorCategory::TaskNotFound => "task_not_found",
            ErrorCategory::DuplicateTask => "duplicate_task",
            ErrorCategory::InvalidJob => "invalid_job",
            ErrorCategory::Config => "config",
            ErrorCategory::Internal => "internal",
        }
    }

    /// Whether the caller can fix this by changing its input.
    pub fn is_client_error(self) -> bool {
        matches!(
            self,
            ErrorCategory::Cycle
                | ErrorCategory::VertexNotFound
                | ErrorCategory::DuplicateTask
                | ErrorCategory::InvalidJob
        )
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl JobsortError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            JobsortError::VertexNotFound(_) => ErrorCategory::VertexNotFound,
            JobsortError::VertexUndefined => ErrorCategory::VertexUndefined,
            JobsortError::GraphCycle(_) => ErrorCategory::Cycle,
            JobsortError::CommandBufferSizeMismatch { .. } => ErrorCategory::BufferSizeMismatch,
            JobsortError::RequestTaskNotFound(_) => ErrorCategory::TaskNotFound,
            JobsortError::DuplicateTask(_) => ErrorCategory::DuplicateTask,
            JobsortError::InvalidJob(_) => ErrorCategory::InvalidJob,
            JobsortError::ConfigError(_) | JobsortError::TomlError(_) => ErrorCategory::Config,
            JobsortError::IoError(_) | JobsortError::JsonError(_) | JobsortError::Other(_) => {
                ErrorCategory::Internal
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, JobsortError>;
