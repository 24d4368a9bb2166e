//! API server configuration.

use std::env;

use auth_service_lib::config::AuthServiceConfig;
use common::{parse_or, ConfigError, ServiceConfig};

/// Bind host variable. Prefixed so it doesn't pick up the `HOST` that some
/// shells export as the machine name.
pub const HOST_VAR: &str = "AUTH_API_HOST";

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Bind address and service name
    pub service: ServiceConfig,
    /// Token and credential settings
    pub auth: AuthServiceConfig,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServiceConfig::default();

        let service = ServiceConfig {
            host: lookup(HOST_VAR).unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port)?,
            service_name: defaults.service_name,
        };

        Ok(Self {
            service,
            auth: AuthServiceConfig::from_lookup(&lookup)?,
        })
    }

    /// Override the bind address, e.g. from command-line flags.
    pub fn with_addr(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.service.host = host;
        }
        if let Some(port) = port {
            self.service.port = port;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port() {
        let config = ApiConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config.service.port, 3000);
        assert_eq!(config.service.addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_env_port_and_override() {
        let config = ApiConfig::from_lookup(|key| match key {
            "PORT" => Some("8080".to_string()),
            "JWT_SECRET" => Some("s3cret".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.service.port, 8080);
        assert_eq!(config.auth.jwt.secret, "s3cret");

        let config = config.with_addr(Some("127.0.0.1".to_string()), Some(9000));
        assert_eq!(config.service.addr(), "127.0.0.1:9000");
    }

    #[test]
    fn test_host_uses_prefixed_variable() {
        let config = ApiConfig::from_lookup(|key| match key {
            "HOST" => Some("my-laptop".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.service.host, "0.0.0.0");

        let config = ApiConfig::from_lookup(|key| match key {
            HOST_VAR => Some("localhost".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.service.host, "localhost");
    }

    #[test]
    fn test_invalid_port() {
        let result = ApiConfig::from_lookup(|key| match key {
            "PORT" => Some("not-a-port".to_string()),
            _ => None,
        });

        assert!(matches!(result, Err(ConfigError::Invalid { key: "PORT", .. })));
    }
}
