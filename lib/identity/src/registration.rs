//! Account registration and user types exchanged with the provider.

use serde::Deserialize;

/// The fields forwarded to the provider when creating an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRegistration {
    username: String,
    password: String,
    email: String,
}

impl AccountRegistration {
    /// Creates a registration. No validation happens here; the provider
    /// decides what it accepts.
    #[must_use]
    pub fn new(username: String, password: String, email: String) -> Self {
        Self {
            username,
            password,
            email,
        }
    }

    /// Returns the requested username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns the email attribute.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Where the provider sent the verification code.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CodeDeliveryDetails {
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub delivery_medium: Option<String>,
    #[serde(default)]
    pub attribute_name: Option<String>,
}

/// The provider's answer to a successful sign-up.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SignUpOutcome {
    /// Whether the account is usable without a confirmation step.
    pub user_confirmed: bool,
    /// Provider-assigned subject identifier.
    pub user_sub: String,
    #[serde(default)]
    pub code_delivery_details: Option<CodeDeliveryDetails>,
}

/// A signed-in user as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityUser {
    pub username: String,
    pub email: Option<String>,
}
