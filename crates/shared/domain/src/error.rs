//! Domain-level errors.
//!
//! Independent of infrastructure concerns (HTTP, storage). Business rule
//! failures such as duplicate emails are raised by the auth service itself.

use thiserror::Error;

/// Domain-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Password hashing or hash parsing failed
    #[error("Password error: {0}")]
    Password(String),
}

impl DomainError {
    /// Create a password error
    pub fn password(msg: impl Into<String>) -> Self {
        DomainError::Password(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
