//! Unified error handling with Sentry integration.
//!
//! Provides the `ApiError` type for the demo's JSON API. Each variant maps
//! onto the wire contract's status codes and failure bodies; internal
//! errors are captured to Sentry before responding.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use pocket_market_core::login::{LoginFailure, messages};

/// API-level error type for the demo.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Email or password missing from the request (400).
    #[error("{}", messages::MISSING_FIELDS)]
    MissingFields,

    /// No directory entry with the given email (401).
    #[error("{}", messages::USER_NOT_FOUND)]
    UserNotFound,

    /// Password mismatch against the directory entry (401).
    #[error("{}", messages::INVALID_PASSWORD)]
    InvalidPassword,

    /// Unexpected internal failure (500).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::MissingFields => StatusCode::BAD_REQUEST,
            Self::UserNotFound | Self::InvalidPassword => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Internal(_) => messages::INTERNAL_ERROR.to_string(),
            other => other.to_string(),
        };

        (status, Json(LoginFailure { message })).into_response()
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;
