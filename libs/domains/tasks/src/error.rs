use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_helpers::error_response;
use thiserror::Error;

/// Fixed message for absent tasks, part of the wire contract.
pub const TASK_NOT_FOUND_MESSAGE: &str = "Task not found";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("{}", TASK_NOT_FOUND_MESSAGE)]
    NotFound,

    #[error("Invalid request payload")]
    InvalidPayload,

    #[error("Task ID is required")]
    MissingId,

    #[error("Task ID in request payload does not match URL")]
    IdMismatch,

    #[error("{0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type TaskResult<T> = Result<T, TaskError>;

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        let status = match self {
            TaskError::NotFound => StatusCode::NOT_FOUND,
            TaskError::InvalidPayload
            | TaskError::MissingId
            | TaskError::IdMismatch
            | TaskError::Validation(_) => StatusCode::BAD_REQUEST,
            TaskError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::info!("Request rejected: {}", self);
        }

        error_response(status, self.to_string())
    }
}
