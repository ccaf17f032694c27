//! Domain error types for server operations.
//!
//! Each enum converts into a user-safe `ServerFnError` before crossing the
//! server function boundary.

use leptos::server_fn::error::ServerFnError;
use quickui_identity::IdentityError;
use rootcause::prelude::Report;
use std::fmt;

/// Message shown when the provider never gave an answer of its own.
const PROVIDER_UNAVAILABLE: &str = "Unable to reach the identity provider. Please try again.";

/// Account creation errors.
#[derive(Debug)]
pub enum AccountError {
    /// The identity provider refused the sign-up.
    Rejected { message: String },
    /// The identity provider could not be reached or answered nonsense.
    ProviderUnavailable { details: String },
    /// No identity provider was registered with the request.
    MissingProvider,
}

impl AccountError {
    /// Classifies a provider report by whether the provider spoke.
    pub fn from_report(report: &Report<IdentityError>) -> Self {
        match report.current_context().provider_message() {
            Some(message) => Self::Rejected {
                message: message.to_string(),
            },
            None => Self::ProviderUnavailable {
                details: report.to_string(),
            },
        }
    }

    /// Convert to a user-safe ServerFnError.
    ///
    /// Provider rejections pass through word for word.
    pub fn into_server_error(self) -> ServerFnError {
        match self {
            AccountError::Rejected { message } => ServerFnError::new(message),
            AccountError::ProviderUnavailable { .. } | AccountError::MissingProvider => {
                ServerFnError::new(PROVIDER_UNAVAILABLE)
            }
        }
    }
}

impl fmt::Display for AccountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected { message } => write!(f, "sign-up rejected: {}", message),
            Self::ProviderUnavailable { details } => {
                write!(f, "identity provider unavailable: {}", details)
            }
            Self::MissingProvider => write!(f, "no identity provider in request context"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_message_passes_through_verbatim() {
        let report: Report<IdentityError> = IdentityError::Rejected {
            code: "InvalidPasswordException".to_string(),
            message: "Password did not conform with policy: Password not long enough"
                .to_string(),
        }
        .into();

        let err = AccountError::from_report(&report).into_server_error();
        assert!(matches!(
            err,
            ServerFnError::ServerError(ref message)
                if message == "Password did not conform with policy: Password not long enough"
        ));
    }

    #[test]
    fn transport_failure_is_generic() {
        let report: Report<IdentityError> = IdentityError::Transport {
            details: "connection refused (os error 111)".to_string(),
        }
        .into();

        let err = AccountError::from_report(&report);
        assert!(matches!(err, AccountError::ProviderUnavailable { .. }));
        assert!(matches!(
            err.into_server_error(),
            ServerFnError::ServerError(ref message) if message == PROVIDER_UNAVAILABLE
        ));
    }
}
