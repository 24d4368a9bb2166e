//! Auth service configuration.

use std::env;

use tracing::warn;

use common::{parse_or, ConfigError, CredentialConfig, JwtConfig};
use domain::{DEFAULT_BCRYPT_COST, DEFAULT_TOKEN_EXPIRATION_HOURS};

/// Secret used when `JWT_SECRET` is unset in debug builds.
const DEV_JWT_SECRET: &str = "dev-secret-key-minimum-32-chars!!";

/// Auth service configuration.
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Token signing settings
    pub jwt: JwtConfig,
    /// Password hashing settings
    pub credentials: CredentialConfig,
}

impl AuthServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// `JWT_SECRET` is required in release builds; debug builds fall back to a
    /// development secret.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = match lookup("JWT_SECRET").filter(|s| !s.is_empty()) {
            Some(secret) => secret,
            None if cfg!(debug_assertions) => {
                warn!("JWT_SECRET not set, using insecure default for development");
                DEV_JWT_SECRET.to_string()
            }
            None => return Err(ConfigError::Missing("JWT_SECRET")),
        };

        let expiration_hours =
            parse_or(&lookup, "JWT_EXPIRATION_HOURS", DEFAULT_TOKEN_EXPIRATION_HOURS)?;
        if expiration_hours <= 0 {
            return Err(ConfigError::Invalid {
                key: "JWT_EXPIRATION_HOURS",
                value: expiration_hours.to_string(),
            });
        }

        let credentials = CredentialConfig {
            bcrypt_cost: parse_or(&lookup, "BCRYPT_COST", DEFAULT_BCRYPT_COST)?,
        }
        .validate()?;

        Ok(Self {
            jwt: JwtConfig {
                secret,
                expiration_hours,
            },
            credentials,
        })
    }
}
