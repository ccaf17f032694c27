//! Shared types used across server functions and UI components.

use leptos::prelude::ServerFnError;

/// User info for display in the UI.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UserInfo {
    pub username: String,
    pub email: Option<String>,
}

/// Values gathered from the sign-up form.
///
/// Every field is `required` on its input; nothing here checks that, and
/// `password_confirmation` is never compared against `password`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

/// A failed sign-up, carrying the message to show the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignUpFailure {
    pub message: String,
}

impl SignUpFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Takes the message out of a server function error.
    ///
    /// Errors raised by the server function itself carry the text verbatim;
    /// anything else (request, decoding) is described by its display form.
    pub fn from_server_error(err: ServerFnError) -> Self {
        match err {
            ServerFnError::ServerError(message) => Self { message },
            other => Self {
                message: other.to_string(),
            },
        }
    }
}
