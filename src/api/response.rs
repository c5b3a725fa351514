//! Response types for the shift API.
//!
//! This module defines the error response structures and the mapping from
//! engine errors to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let status = match &error {
            EngineError::ShiftNotFound { .. }
            | EngineError::WorkerNotFound { .. }
            | EngineError::LocationNotFound { .. } => StatusCode::NOT_FOUND,
            EngineError::InvalidStatus { .. }
            | EngineError::AlreadyCancelled
            | EngineError::CancelCompleted => StatusCode::CONFLICT,
            EngineError::NotAssigned { .. } => StatusCode::FORBIDDEN,
            EngineError::ClockInTooEarly { .. }
            | EngineError::ClockInExpired { .. }
            | EngineError::ClockOutTooSoon { .. }
            | EngineError::InvalidTimeFormat { .. } => StatusCode::BAD_REQUEST,
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        Self {
            status,
            error: ApiError::new(error.error_code(), error.to_string()),
        }
    }
}
