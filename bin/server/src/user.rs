//! User-related server functions for session lookup.

use crate::types::UserInfo;
use leptos::prelude::*;

/// Server function to get the current user info.
///
/// The session cookie carries the provider access token. A missing cookie,
/// an unrecognised token, or a provider failure all mean "no user".
#[server]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    use crate::config::SessionConfig;
    use axum::Extension;
    use axum_extra::extract::CookieJar;
    use quickui_identity::CognitoClient;
    use std::sync::Arc;

    let jar: CookieJar = leptos_axum::extract().await?;
    let Extension(session_config): Extension<SessionConfig> = leptos_axum::extract().await?;
    let Extension(provider): Extension<Arc<CognitoClient>> = leptos_axum::extract().await?;

    let access_token = jar
        .get(&session_config.cookie_name)
        .map(|cookie| cookie.value().to_string());

    Ok(lookup_current_user(provider.as_ref(), access_token.as_deref()).await)
}

/// Asks the provider who owns the session token, if there is one.
#[cfg(feature = "ssr")]
pub(crate) async fn lookup_current_user<P>(
    provider: &P,
    access_token: Option<&str>,
) -> Option<UserInfo>
where
    P: quickui_identity::IdentityProvider + ?Sized,
{
    let access_token = access_token?;

    match provider.current_user(access_token).await {
        Ok(Some(user)) => Some(UserInfo {
            username: user.username,
            email: user.email,
        }),
        Ok(None) => None,
        Err(e) => {
            tracing::debug!(error = %e, "Failed to look up current user");
            None
        }
    }
}
