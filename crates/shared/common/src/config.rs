//! Shared configuration structures.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use domain::{is_valid_bcrypt_cost, DEFAULT_BCRYPT_COST, DEFAULT_TOKEN_EXPIRATION_HOURS};

/// Errors raised while loading configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Read `key` through `lookup` and parse it, falling back to `default` when unset.
pub fn parse_or<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}

/// Base service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl ServiceConfig {
    /// Full socket address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "auth-api".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

/// JWT configuration for session tokens.
#[derive(Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    #[serde(skip_serializing)]
    pub secret: String,
    pub expiration_hours: i64,
}

impl JwtConfig {
    /// Get JWT secret as bytes.
    pub fn secret_bytes(&self) -> &[u8] {
        self.secret.as_bytes()
    }
}

// Don't expose the secret in debug output
impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[REDACTED]")
            .field("expiration_hours", &self.expiration_hours)
            .finish()
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            expiration_hours: DEFAULT_TOKEN_EXPIRATION_HOURS,
        }
    }
}

/// Password hashing configuration.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct CredentialConfig {
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl CredentialConfig {
    /// Validate the work factor against bcrypt's supported range.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if is_valid_bcrypt_cost(self.bcrypt_cost) {
            Ok(self)
        } else {
            Err(ConfigError::Invalid {
                key: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            })
        }
    }
}

impl Default for CredentialConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(
        pairs: &'static [(&'static str, &'static str)],
    ) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_parse_or_default_and_value() {
        let lookup = lookup_from(&[("PORT", "8080")]);

        assert_eq!(parse_or(&lookup, "PORT", 3000u16), Ok(8080));
        assert_eq!(parse_or(&lookup, "OTHER", 3000u16), Ok(3000));
    }

    #[test]
    fn test_parse_or_invalid() {
        let lookup = lookup_from(&[("PORT", "eighty")]);

        assert_eq!(
            parse_or(&lookup, "PORT", 3000u16),
            Err(ConfigError::Invalid {
                key: "PORT",
                value: "eighty".to_string()
            })
        );
    }

    #[test]
    fn test_jwt_config_debug_redacts_secret() {
        let config = JwtConfig {
            secret: "super-secret".to_string(),
            expiration_hours: 3,
        };

        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_credential_config_validate() {
        assert!(CredentialConfig::default().validate().is_ok());
        assert!(CredentialConfig { bcrypt_cost: 2 }.validate().is_err());
    }
}
