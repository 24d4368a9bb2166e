//! Stateless HS256 session tokens.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use common::{AppError, AppResult, JwtConfig};
use domain::{Claims, User, SECONDS_PER_HOUR};

/// Issues and verifies signed session tokens.
///
/// Nothing is stored server side: a token is valid exactly as long as its
/// signature checks out and `exp` lies in the future.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_seconds: i64,
}

impl TokenService {
    /// Create a token service signing with `secret`.
    pub fn new(secret: &[u8], expiration_hours: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl_seconds: expiration_hours * SECONDS_PER_HOUR,
        }
    }

    /// Create a token service from JWT configuration.
    pub fn from_config(config: &JwtConfig) -> Self {
        Self::new(config.secret_bytes(), config.expiration_hours)
    }

    /// Issue a token for a user, stamped with the current time.
    pub fn issue(&self, user: &User) -> AppResult<String> {
        self.issue_at(user, Utc::now().timestamp())
    }

    /// Issue a token for a user as if issued at `iat`.
    ///
    /// Identical inputs produce identical tokens.
    pub fn issue_at(&self, user: &User, iat: i64) -> AppResult<String> {
        let claims = Claims::for_user(user, iat, self.ttl_seconds);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to sign token: {}", e)))
    }

    /// Verify signature and expiry, returning the embedded claims.
    ///
    /// Any failure is reported as `InvalidToken`. A token stops being valid
    /// in the second its `exp` is reached.
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;

        if token_data.claims.is_expired_at(Utc::now().timestamp()) {
            return Err(AppError::InvalidToken);
        }

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-secret-key-for-testing-only";

    fn alice() -> User {
        User::new(1, "Alice".into(), "a@x.com".into(), "hash".into())
    }

    #[test]
    fn test_issue_and_verify() {
        let tokens = TokenService::new(SECRET, 3);
        let token = tokens.issue(&alice()).unwrap();

        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.id, 1);
        assert_eq!(claims.name, "Alice");
        assert_eq!(claims.exp - claims.iat, 3 * SECONDS_PER_HOUR);
    }

    #[test]
    fn test_issue_at_is_deterministic() {
        let tokens = TokenService::new(SECRET, 3);
        let now = Utc::now().timestamp();

        assert_eq!(
            tokens.issue_at(&alice(), now).unwrap(),
            tokens.issue_at(&alice(), now).unwrap()
        );
    }

    #[test]
    fn test_expired_token_rejected() {
        let tokens = TokenService::new(SECRET, 3);
        let four_hours_ago = Utc::now().timestamp() - 4 * SECONDS_PER_HOUR;
        let token = tokens.issue_at(&alice(), four_hours_ago).unwrap();

        assert!(matches!(tokens.verify(&token), Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_token_rejected_when_exp_reached() {
        let tokens = TokenService::new(SECRET, 3);
        let issued = Utc::now().timestamp() - 3 * SECONDS_PER_HOUR;
        let token = tokens.issue_at(&alice(), issued).unwrap();

        assert!(matches!(tokens.verify(&token), Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_token_accepted_before_exp() {
        let tokens = TokenService::new(SECRET, 3);
        let issued = Utc::now().timestamp() - 3 * SECONDS_PER_HOUR + 60;
        let token = tokens.issue_at(&alice(), issued).unwrap();

        assert!(tokens.verify(&token).is_ok());
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let tokens = TokenService::new(SECRET, 3);
        let token = tokens.issue(&alice()).unwrap();

        let (body, signature) = token.rsplit_once('.').unwrap();
        let mut sig: Vec<char> = signature.chars().collect();
        sig[10] = if sig[10] == 'A' { 'B' } else { 'A' };
        let tampered = format!("{}.{}", body, sig.into_iter().collect::<String>());

        assert!(matches!(tokens.verify(&tampered), Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_other_secret_rejected() {
        let issuer = TokenService::new(b"another-secret", 3);
        let verifier = TokenService::new(SECRET, 3);
        let token = issuer.issue(&alice()).unwrap();

        assert!(matches!(verifier.verify(&token), Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_malformed_token_rejected() {
        let tokens = TokenService::new(SECRET, 3);

        for token in ["", "garbage", "a.b.c", "a.b"] {
            assert!(matches!(tokens.verify(token), Err(AppError::InvalidToken)));
        }
    }

    #[test]
    fn test_other_algorithm_rejected() {
        let tokens = TokenService::new(SECRET, 3);
        let claims = Claims::for_user(&alice(), Utc::now().timestamp(), 3600);
        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert!(matches!(tokens.verify(&token), Err(AppError::InvalidToken)));
    }
}
