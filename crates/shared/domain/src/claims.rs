//! Session token claims.

use serde::{Deserialize, Serialize};

use crate::user::{User, UserId};

/// Claims embedded in a signed session token.
///
/// Field names are part of the wire format: `iat` and `exp` are Unix
/// timestamps in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Claims {
    /// User identifier
    pub id: UserId,
    /// User display name
    pub name: String,
    /// Issued-at timestamp
    pub iat: i64,
    /// Expiry timestamp
    pub exp: i64,
}

impl Claims {
    /// Build claims for a user issued at `iat` and valid for `ttl_seconds`.
    pub fn for_user(user: &User, iat: i64, ttl_seconds: i64) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            iat,
            exp: iat + ttl_seconds,
        }
    }

    /// Check whether the claims have expired at `now`
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_user() {
        let user = User::new(7, "Alice".into(), "a@x.com".into(), String::new());
        let claims = Claims::for_user(&user, 1_000, 10_800);

        assert_eq!(claims.id, 7);
        assert_eq!(claims.name, "Alice");
        assert_eq!(claims.exp, 11_800);
        assert!(!claims.is_expired_at(11_799));
        assert!(claims.is_expired_at(11_800));
    }
}
