//! Host Error Types
//!
//! Error types for the asset host and their conversion to HTTP responses.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Asset host errors
#[derive(Error, Debug)]
pub enum HostError {
    /// Requested asset does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration rejected at startup
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Bundle pattern is not a valid regex
    #[error("Invalid bundle pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl IntoResponse for HostError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            HostError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            HostError::InvalidConfig(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INVALID_CONFIG"),
            HostError::Pattern(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INVALID_CONFIG"),
            HostError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            HostError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        };

        if status.is_server_error() {
            tracing::error!(
                error_code = %code,
                error_message = %self,
                "Host error occurred"
            );
        } else {
            tracing::debug!(error_code = %code, error_message = %self, "Asset not served");
        }

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, [(header::CACHE_CONTROL, "no-store")], Json(body)).into_response()
    }
}

/// Result type for host operations
pub type HostResult<T> = Result<T, HostError>;
