//! Identity provider configuration.
//!
//! This module provides configuration types for connecting to an AWS
//! Cognito user pool app client.

use serde::{Deserialize, Serialize};

/// Configuration for the Cognito user pool app client.
///
/// Only public (secretless) app clients are supported; `SignUp` and
/// `GetUser` are unauthenticated calls that need no AWS credentials.
///
/// Fields with defaults can be omitted when loading from environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CognitoConfig {
    /// AWS region hosting the user pool (e.g., "us-east-1").
    region: String,
    /// The app client ID registered with the user pool.
    client_id: String,
    /// Overrides the regional endpoint (local emulators, tests).
    #[serde(default)]
    endpoint: Option<String>,
    /// Per-request timeout in seconds.
    /// Default: 10
    #[serde(default = "default_request_timeout_seconds")]
    request_timeout_seconds: u64,
}

fn default_request_timeout_seconds() -> u64 {
    10
}

impl CognitoConfig {
    /// Creates a new configuration with defaults for optional fields.
    #[must_use]
    pub fn new(region: String, client_id: String) -> Self {
        Self {
            region,
            client_id,
            endpoint: None,
            request_timeout_seconds: default_request_timeout_seconds(),
        }
    }

    /// Points the client at a custom endpoint instead of the regional one.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: String) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn with_request_timeout_seconds(mut self, seconds: u64) -> Self {
        self.request_timeout_seconds = seconds;
        self
    }

    /// Returns the AWS region.
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Returns the app client ID.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns the endpoint requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!("https://cognito-idp.{}.amazonaws.com/", self.region),
        }
    }

    /// Returns the per-request timeout in seconds.
    #[must_use]
    pub fn request_timeout_seconds(&self) -> u64 {
        self.request_timeout_seconds
    }
}
