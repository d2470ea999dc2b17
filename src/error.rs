//! Custom error types and handling
//!
//! This module defines the sorting core's error type and the application's
//! error type, plus the conversion to HTTP responses for the Axum framework.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Errors raised by the sorting core
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    /// The requested algorithm name is not one of the supported identifiers
    #[error("Unsupported sort algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// An algorithm rejected its input (e.g. radix sort given a negative value)
    #[error("{algorithm} sort failed: {message}")]
    AlgorithmExecution {
        algorithm: &'static str,
        message: String,
    },
}

impl SortError {
    pub(crate) fn execution(algorithm: &'static str, message: impl Into<String>) -> Self {
        Self::AlgorithmExecution {
            algorithm,
            message: message.into(),
        }
    }
}

/// Result type alias for the sorting core
pub type SortResult<T> = Result<T, SortError>;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Request errors
    #[error("Malformed job: {0}")]
    MalformedJob(String),

    #[error("Sort only accepts POST method, you tried {0}")]
    MethodNotAllowed(String),

    // Core errors
    #[error(transparent)]
    Sort(#[from] SortError),

    // External service errors
    #[error("Publish error: {0}")]
    Publish(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetails,
}

/// Error details in response
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedJob(_) => "MALFORMED_JOB",
            Self::MethodNotAllowed(_) => "METHOD_NOT_ALLOWED",
            Self::Sort(SortError::UnsupportedAlgorithm(_)) => "UNSUPPORTED_ALGORITHM",
            Self::Sort(SortError::AlgorithmExecution { .. }) => "ALGORITHM_EXECUTION_ERROR",
            Self::Publish(_) => "PUBLISH_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// Malformed payloads and job-level sort failures both surface as 500,
    /// matching the handler contract of the sort endpoint.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::MalformedJob(_)
            | Self::Sort(_)
            | Self::Publish(_)
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log internal errors but don't expose details to clients
        let message = match &self {
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                "An internal error occurred".to_string()
            }
            _ => {
                tracing::error!(code = self.error_code(), "{}", self);
                self.to_string()
            }
        };

        let body = ErrorResponse {
            error: ErrorDetails {
                code: self.error_code().to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

// Implement From for common error types
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedJob(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::MalformedJob(err.to_string())
    }
}

impl From<redis::RedisError> for AppError {
    fn from(err: redis::RedisError) -> Self {
        AppError::Publish(err.to_string())
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::MalformedJob("no body".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::MethodNotAllowed("GET".into()).status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            AppError::from(SortError::UnsupportedAlgorithm("bogus".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_codes() {
        let err = AppError::from(SortError::UnsupportedAlgorithm("bogus".into()));
        assert_eq!(err.error_code(), "UNSUPPORTED_ALGORITHM");
        assert_eq!(err.to_string(), "Unsupported sort algorithm: bogus");

        let err = AppError::from(SortError::execution("radix", "negative value -1"));
        assert_eq!(err.error_code(), "ALGORITHM_EXECUTION_ERROR");
        assert_eq!(err.to_string(), "radix sort failed: negative value -1");
    }
}
