//! Application error type and its HTTP representation.
//!
//! Decoding outcomes (malformed, missing, expired, valid) are never errors; they
//! are [`crate::domain::link::LinkStatus`] values. [`AppError`] covers request
//! validation and infrastructure failures only.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use std::fmt;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error payload, also embedded in batch results.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    /// The backing store could not be reached or did not answer in time.
    Unavailable { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::Unavailable {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Returns true for infrastructure failures of an external collaborator.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, AppError::Unavailable { .. })
    }

    fn parts(&self) -> (StatusCode, &'static str, &str, &Value) {
        match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::Unavailable { message, details } => (
                StatusCode::SERVICE_UNAVAILABLE,
                "store_unavailable",
                message,
                details,
            ),
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.parts().0
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (_, code, message, details) = self.parts();
        ErrorInfo {
            code,
            message: message.to_string(),
            details: details.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (_, code, message, _) = self.parts();
        write!(f, "{code}: {message}")
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::bad_request("Request validation failed", json!(e))
    }
}

/// Maps a driver error onto the application error space.
///
/// Connectivity failures become [`AppError::Unavailable`] so that callers can
/// tell "store down" apart from "no such link".
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    match e {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => {
            AppError::unavailable("Data store unavailable", json!({ "reason": e.to_string() }))
        }
        sqlx::Error::RowNotFound => {
            AppError::internal("Referenced record is missing", json!({}))
        }
        _ => AppError::internal("Database error", json!({})),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_timeout_is_unavailable() {
        let err = map_sqlx_error(sqlx::Error::PoolTimedOut);
        assert!(err.is_unavailable());
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_row_not_found_is_internal() {
        let err = map_sqlx_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[test]
    fn test_error_info_carries_code_and_message() {
        let info = AppError::bad_request("Unknown link category", json!({ "category": "x" }))
            .to_error_info();
        assert_eq!(info.code, "validation_error");
        assert_eq!(info.message, "Unknown link category");
        assert_eq!(info.details["category"], "x");
    }

    #[test]
    fn test_no_error_renders_as_not_found() {
        let errors = [
            AppError::bad_request("bad", json!({})),
            AppError::unavailable("down", json!({})),
            AppError::internal("boom", json!({})),
            map_sqlx_error(sqlx::Error::RowNotFound),
        ];

        for err in errors {
            assert_ne!(err.status_code(), StatusCode::NOT_FOUND, "{err}");
        }
    }

    #[test]
    fn test_display_includes_code() {
        let err = AppError::unavailable("Lookup timed out", json!({}));
        assert_eq!(err.to_string(), "store_unavailable: Lookup timed out");
    }
}
