//! # Axum Helpers
//!
//! A small collection of utilities for building Axum web applications.
//!
//! ## Modules
//!
//! - **[`errors`]**: flat `{"error": "..."}` error bodies
//! - **[`extractors`]**: JSON body extractor with a fixed rejection message
//! - **[`health`]**: liveness endpoint reporting app name and version
//! - **[`server`]**: server bootstrap with graceful shutdown

pub mod errors;
pub mod extractors;
pub mod health;
pub mod server;

pub use errors::{error_response, ErrorBody};
pub use extractors::JsonBody;
pub use health::{health_router, HealthResponse};
pub use server::{create_app, shutdown_signal};
