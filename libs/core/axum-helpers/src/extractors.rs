//! JSON body extractor with a fixed rejection message.

use axum::{
    extract::{FromRequest, Json, Request},
    http::StatusCode,
    response::Response,
};
use serde::de::DeserializeOwned;

use crate::errors::error_response;

/// Message returned for any body that fails JSON extraction.
pub const INVALID_PAYLOAD_MESSAGE: &str = "Invalid request payload";

/// JSON extractor that rejects malformed bodies with a flat error body.
///
/// Axum's stock `Json` rejection leaks parser internals to the client;
/// this wrapper collapses every rejection (bad syntax, wrong types,
/// missing content-type) into `400 {"error": "Invalid request payload"}`.
///
/// # Example
/// ```ignore
/// use axum_helpers::JsonBody;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct CreateUser {
///     username: String,
/// }
///
/// async fn create_user(JsonBody(payload): JsonBody<CreateUser>) -> String {
///     format!("Creating user: {}", payload.username)
/// }
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await.map_err(|e| {
            tracing::info!("JSON extraction failed: {}", e.body_text());
            error_response(StatusCode::BAD_REQUEST, INVALID_PAYLOAD_MESSAGE)
        })?;

        Ok(JsonBody(data))
    }
}
