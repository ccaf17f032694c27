//! The identity provider seam.

use crate::error::IdentityError;
use crate::registration::{AccountRegistration, IdentityUser, SignUpOutcome};
use async_trait::async_trait;
use rootcause::prelude::Report;

/// A hosted identity service that owns accounts and sessions.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Creates an account.
    ///
    /// Any refusal by the provider (taken username, weak password, malformed
    /// email) comes back as [`IdentityError::Rejected`] carrying the
    /// provider's own message.
    async fn sign_up(
        &self,
        registration: &AccountRegistration,
    ) -> Result<SignUpOutcome, Report<IdentityError>>;

    /// Looks up the user owning an access token.
    ///
    /// Returns `Ok(None)` when the provider does not recognise the token as
    /// belonging to a signed-in user.
    async fn current_user(
        &self,
        access_token: &str,
    ) -> Result<Option<IdentityUser>, Report<IdentityError>>;
}
