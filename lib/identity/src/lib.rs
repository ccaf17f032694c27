//! External identity provider access for QuickUI.
//!
//! This crate provides:
//! - The `IdentityProvider` trait: account creation and current-user lookup
//! - `CognitoClient`: an AWS Cognito user pool implementation
//! - `CognitoConfig`: provider configuration loaded by the server
//! - Identity error types
//!
//! Credential storage, password policy, uniqueness checks and verification
//! email dispatch all belong to the provider. This crate only forwards
//! requests and reports what the provider answered.
//!
//! # Example
//!
//! ```
//! use quickui_identity::{AccountRegistration, CognitoConfig};
//!
//! let config = CognitoConfig::new("eu-west-1".to_string(), "client-abc".to_string());
//! assert_eq!(config.endpoint(), "https://cognito-idp.eu-west-1.amazonaws.com/");
//!
//! let registration = AccountRegistration::new(
//!     "alice".to_string(),
//!     "correct horse battery staple".to_string(),
//!     "alice@example.com".to_string(),
//! );
//! assert_eq!(registration.email(), "alice@example.com");
//! ```

pub mod cognito;
pub mod config;
pub mod error;
pub mod provider;
pub mod registration;

// Re-export main types at crate root
pub use cognito::CognitoClient;
pub use config::CognitoConfig;
pub use error::IdentityError;
pub use provider::IdentityProvider;
pub use registration::{AccountRegistration, CodeDeliveryDetails, IdentityUser, SignUpOutcome};
