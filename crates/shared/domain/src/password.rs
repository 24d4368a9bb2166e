//! Password value object - Domain layer credential handling.
//!
//! DDD: Encapsulates password hashing as a domain value object.
//! DRY: Centralized bcrypt configuration.

use crate::constants::{is_valid_bcrypt_cost, MAX_BCRYPT_COST, MIN_BCRYPT_COST};
use crate::error::{DomainError, DomainResult};

/// Password value object that handles hashing and verification.
///
/// The stored form is a bcrypt modular-crypt string (`$2b$<cost>$<salt+hash>`),
/// so algorithm, cost and salt travel with the hash and verification needs
/// nothing else.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output (security)
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash plain text with an explicit bcrypt work factor.
    ///
    /// # Errors
    /// Returns a password error if the cost is outside bcrypt's range or the
    /// underlying primitive fails.
    pub fn with_cost(plain_text: &str, cost: u32) -> DomainResult<Self> {
        if !is_valid_bcrypt_cost(cost) {
            return Err(DomainError::password(format!(
                "bcrypt cost must be between {} and {}",
                MIN_BCRYPT_COST, MAX_BCRYPT_COST
            )));
        }

        let hash = bcrypt::hash(plain_text, cost)
            .map_err(|e| DomainError::password(format!("Password hash failed: {}", e)))?;
        Ok(Self { hash })
    }

    /// Create a Password from an existing hash (from the user store).
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text password against this hash.
    ///
    /// A malformed stored hash is treated as a mismatch.
    pub fn verify(&self, plain_text: &str) -> bool {
        self.try_verify(plain_text).unwrap_or(false)
    }

    /// Verify a plain text password, surfacing a malformed hash as an error.
    ///
    /// A wrong password is `Ok(false)`, never an error.
    pub fn try_verify(&self, plain_text: &str) -> DomainResult<bool> {
        bcrypt::verify(plain_text, &self.hash)
            .map_err(|e| DomainError::password(format!("Invalid hash format: {}", e)))
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Password {}
