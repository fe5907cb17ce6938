//! Error handling module
//!
//! Defines the outcome of a failed chat proxy call and how it is rendered to the client

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application error types
///
/// The `Display` output of each variant is the exact message placed in the error envelope.
#[derive(Error, Debug)]
pub enum AppError {
    /// No upstream credential configured
    #[error("API key not configured")]
    MissingApiKey,

    /// Request body is not valid JSON
    #[error("Invalid JSON in request")]
    InvalidJson,

    /// Declared request body exceeds the configured limit
    #[error("Request body exceeds {0} bytes")]
    PayloadTooLarge(usize),

    /// Upstream API answered with a non-success status
    #[error("API Error: {body}")]
    Upstream {
        /// Status code returned by the upstream
        status: u16,
        /// Raw upstream error body
        body: String,
    },

    /// Any other failure (transport, body read, ...)
    #[error("Server error: {0}")]
    Internal(String),
}

/// Error envelope sent with every non-success response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl AppError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidJson => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::MissingApiKey | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error class name, used for logging
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::MissingApiKey => "config_error",
            AppError::InvalidJson | AppError::PayloadTooLarge(_) => "malformed_request",
            AppError::Upstream { .. } => "upstream_error",
            AppError::Internal(_) => "server_error",
        }
    }

    /// Whether the failure originates on this server rather than with the client or upstream
    pub fn is_server_fault(&self) -> bool {
        matches!(self, AppError::MissingApiKey | AppError::Internal(_))
    }

    /// Convert to the client-facing error envelope
    pub fn to_envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope {
            error: ErrorBody {
                message: self.to_string(),
            },
        }
    }
}

/// Implement IntoResponse trait to allow errors to be returned directly as HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_server_fault() {
            tracing::error!("Application error: {} - Status code: {}", self, status);
        } else {
            tracing::warn!("Request failed: {} - Status code: {}", self.error_type(), status);
        }

        (status, Json(self.to_envelope())).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;
