//! Unified error handling for the HTTP API.
//!
//! Every error renders as a JSON `{ "message": ... }` body. Status codes:
//! - 400 for validation and credential failures
//! - 403 when no token was presented
//! - 401 when a presented token fails verification
//! - 500 for anything internal

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Registration & login
    #[error("User already exists")]
    UserExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid password")]
    InvalidPassword,

    // Token gate
    #[error("Token is required")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    // Validation
    #[error("{0}")]
    Validation(String),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body for HTTP
#[derive(Debug, Serialize)]
struct ErrorResponse {
    message: String,
}

impl AppError {
    /// Get error code for logs
    pub fn code(&self) -> &'static str {
        match self {
            AppError::UserExists => "USER_EXISTS",
            AppError::UserNotFound => "USER_NOT_FOUND",
            AppError::InvalidPassword => "INVALID_PASSWORD",
            AppError::MissingToken => "MISSING_TOKEN",
            AppError::InvalidToken => "INVALID_TOKEN",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::UserExists
            | AppError::UserNotFound
            | AppError::InvalidPassword
            | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::MissingToken => StatusCode::FORBIDDEN,
            AppError::InvalidToken => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(code = self.code(), status = status.as_u16(), "request failed");

        let body = ErrorResponse {
            message: self.user_message(),
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Password(msg) => AppError::Internal(msg),
        }
    }
}

// =============================================================================
// Token Error Conversion
// =============================================================================

/// Every verification failure collapses into `InvalidToken`; the cause is
/// only visible in debug logs.
#[cfg(feature = "jwt")]
impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        tracing::debug!("Token rejected: {:?}", err.kind());
        AppError::InvalidToken
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
