//! In-memory identity provider for server tests.

use async_trait::async_trait;
use quickui_identity::{
    AccountRegistration, IdentityError, IdentityProvider, IdentityUser, SignUpOutcome,
};
use rootcause::prelude::Report;
use std::sync::Mutex;

/// How the stub answers every call.
#[derive(Clone)]
enum Behaviour {
    SignedIn(String),
    SignedOut,
    Rejecting { code: String, message: String },
    Unreachable,
}

/// Provider double that records what it was asked.
pub(crate) struct StubProvider {
    behaviour: Behaviour,
    registrations: Mutex<Vec<AccountRegistration>>,
    current_user_calls: Mutex<Vec<String>>,
}

impl StubProvider {
    fn with(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            registrations: Mutex::new(Vec::new()),
            current_user_calls: Mutex::new(Vec::new()),
        }
    }

    /// Accepts sign-ups and reports `username` as signed in.
    pub(crate) fn signed_in(username: &str) -> Self {
        Self::with(Behaviour::SignedIn(username.to_string()))
    }

    /// Accepts sign-ups and recognises no session.
    pub(crate) fn signed_out() -> Self {
        Self::with(Behaviour::SignedOut)
    }

    /// Refuses every call with the given provider error.
    pub(crate) fn rejecting(code: &str, message: &str) -> Self {
        Self::with(Behaviour::Rejecting {
            code: code.to_string(),
            message: message.to_string(),
        })
    }

    /// Fails every call as if the network were down.
    pub(crate) fn unreachable() -> Self {
        Self::with(Behaviour::Unreachable)
    }

    pub(crate) fn registrations(&self) -> Vec<AccountRegistration> {
        self.registrations.lock().expect("registrations lock").clone()
    }

    pub(crate) fn current_user_calls(&self) -> Vec<String> {
        self.current_user_calls
            .lock()
            .expect("current user lock")
            .clone()
    }

    fn failure(&self) -> Option<IdentityError> {
        match &self.behaviour {
            Behaviour::Rejecting { code, message } => Some(IdentityError::Rejected {
                code: code.clone(),
                message: message.clone(),
            }),
            Behaviour::Unreachable => Some(IdentityError::Transport {
                details: "connection refused".to_string(),
            }),
            Behaviour::SignedIn(_) | Behaviour::SignedOut => None,
        }
    }
}

#[async_trait]
impl IdentityProvider for StubProvider {
    async fn sign_up(
        &self,
        registration: &AccountRegistration,
    ) -> Result<SignUpOutcome, Report<IdentityError>> {
        self.registrations
            .lock()
            .expect("registrations lock")
            .push(registration.clone());

        if let Some(err) = self.failure() {
            return Err(err.into());
        }

        Ok(SignUpOutcome {
            user_confirmed: false,
            user_sub: "sub-1".to_string(),
            code_delivery_details: None,
        })
    }

    async fn current_user(
        &self,
        access_token: &str,
    ) -> Result<Option<IdentityUser>, Report<IdentityError>> {
        self.current_user_calls
            .lock()
            .expect("current user lock")
            .push(access_token.to_string());

        if let Some(err) = self.failure() {
            return Err(err.into());
        }

        match &self.behaviour {
            Behaviour::SignedIn(username) => Ok(Some(IdentityUser {
                username: username.clone(),
                email: Some(format!("{username}@example.com")),
            })),
            _ => Ok(None),
        }
    }
}
