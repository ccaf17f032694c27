//! Error types for the identity crate.
//!
//! Errors are designed for layered context using rootcause. Callers receive
//! `Report<IdentityError>` and inspect the current context to decide what
//! to show the user.

use std::fmt;

/// Errors from identity provider operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// The provider answered and refused the request.
    Rejected {
        /// Provider error code, without any namespace prefix.
        code: String,
        /// Human-readable message supplied by the provider.
        message: String,
    },
    /// The provider could not be reached.
    Transport { details: String },
    /// The provider answered with something we could not interpret.
    InvalidResponse { details: String },
    /// The client could not be constructed.
    Configuration { details: String },
}

impl IdentityError {
    /// Returns the provider's message if the provider rejected the request.
    #[must_use]
    pub fn provider_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Returns true if this is a rejection carrying the given error code.
    #[must_use]
    pub fn is_rejection(&self, expected: &str) -> bool {
        matches!(self, Self::Rejected { code, .. } if code == expected)
    }
}

impl fmt::Display for IdentityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected { code, message } => {
                write!(f, "identity provider rejected request ({code}): {message}")
            }
            Self::Transport { details } => {
                write!(f, "identity provider unreachable: {details}")
            }
            Self::InvalidResponse { details } => {
                write!(f, "invalid identity provider response: {details}")
            }
            Self::Configuration { details } => {
                write!(f, "identity provider configuration error: {details}")
            }
        }
    }
}

impl std::error::Error for IdentityError {}
