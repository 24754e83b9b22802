//! Unified application error type
//!
//! `AppError` bridges the gap between DB-layer errors (`sqlx::Error`) and the
//! HTTP layer. Handlers return `Result<_, AppError>` and propagate with `?`;
//! `IntoResponse` turns the error kind into a status code. Storage failures
//! are logged where they are converted, never swallowed.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Error kind, mapped to an HTTP status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Rejected input (400)
    Validation,
    /// Missing or bad credentials (401)
    Unauthorized,
    /// Resource does not exist (404)
    NotFound,
    /// Storage failure (500)
    Database,
    /// Anything else server-side (500)
    Internal,
}

impl ErrorCode {
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Validation => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Database => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::Validation => "Validation failed",
            Self::Unauthorized => "Authentication required",
            Self::NotFound => "Resource not found",
            Self::Database => "Database error",
            Self::Internal => "Internal server error",
        }
    }
}

/// Application error with a structured kind and a human-readable message
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
}

impl AppError {
    /// Create an error with the default message for the kind
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.default_message().to_string(),
            code,
        }
    }

    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::Validation, msg)
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::NotFound, format!("{} not found", resource.into()))
    }

    pub fn unauthorized() -> Self {
        Self::new(ErrorCode::Unauthorized)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::Internal, msg)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "database error");
        AppError::new(ErrorCode::Database)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.code.http_status();
        let mut response = (status, self.message).into_response();
        if self.code == ErrorCode::Unauthorized {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static("Basic realm=\"team-manager\""),
            );
        }
        response
    }
}

/// Convenience type alias for handler results
pub type AppResult<T> = Result<T, AppError>;
