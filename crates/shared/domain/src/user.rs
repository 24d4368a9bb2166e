//! User domain entity.

use serde::{Deserialize, Serialize};

/// Sequential user identifier, starting at 1.
pub type UserId = u64;

/// User domain entity.
///
/// Records are created by registration and never updated or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl User {
    /// Create a new user record
    pub fn new(id: UserId, name: String, email: String, password_hash: String) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
        }
    }
}
