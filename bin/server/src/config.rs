//! Centralized server configuration.
//!
//! This module provides strongly-typed configuration for the server,
//! loaded via the `config` crate from environment variables.
//!
//! See [`CognitoConfig`](quickui_identity::CognitoConfig) for identity
//! provider configuration.

use quickui_identity::CognitoConfig;
use serde::Deserialize;

/// Server configuration composed from library configs.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Session cookie configuration.
    #[serde(default)]
    pub session: SessionConfig,

    /// Identity provider configuration.
    pub cognito: CognitoConfig,
}

/// Session-related configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Name of the cookie carrying the provider access token.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

fn default_cookie_name() -> String {
    "session".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration is missing or invalid.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_source(
            config::Environment::default()
                .separator("__")
                .try_parsing(true),
        )
    }

    fn from_source<S>(source: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn environment(vars: &[(&str, &str)]) -> config::Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::default()
            .separator("__")
            .try_parsing(true)
            .source(Some(source))
    }

    #[test]
    fn session_config_has_correct_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.cookie_name, "session");
    }

    #[test]
    fn loads_cognito_settings_from_environment() {
        let config = ServerConfig::from_source(environment(&[
            ("COGNITO__REGION", "eu-central-1"),
            ("COGNITO__CLIENT_ID", "abc123"),
            ("COGNITO__REQUEST_TIMEOUT_SECONDS", "3"),
        ]))
        .expect("valid configuration");

        assert_eq!(config.cognito.region(), "eu-central-1");
        assert_eq!(config.cognito.client_id(), "abc123");
        assert_eq!(config.cognito.request_timeout_seconds(), 3);
        assert_eq!(config.session.cookie_name, "session");
    }

    #[test]
    fn missing_cognito_settings_is_an_error() {
        let result = ServerConfig::from_source(environment(&[("SESSION__COOKIE_NAME", "sid")]));
        assert!(result.is_err());
    }
}
