//! Flat error bodies for HTTP responses.
//!
//! Every error leaving the API has the shape `{"error": "<message>"}`
//! with `Content-Type: application/json`. Domain error enums convert
//! themselves through [`error_response`] in their `IntoResponse` impls.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire format of every error response.
///
/// `Deserialize` is derived so tests can assert on response bodies.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable error message
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Build a JSON error response with the given status code.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorBody::new(message))).into_response()
}
