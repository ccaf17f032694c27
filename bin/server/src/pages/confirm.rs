//! Confirmation page shown after a successful sign-up.

use crate::routes;
use leptos::prelude::*;
use leptos_meta::Title;

/// Server function reporting whether the pending-confirmation marker came
/// with the request.
#[server]
pub async fn pending_confirmation() -> Result<bool, ServerFnError> {
    use crate::signup::{CONFIRM_COOKIE, PendingConfirmationMarker};
    use axum_extra::extract::CookieJar;

    let jar: CookieJar = leptos_axum::extract().await?;
    let pending = jar
        .get(CONFIRM_COOKIE)
        .is_some_and(|cookie| PendingConfirmationMarker::matches(cookie.value()));

    tracing::debug!(pending, "Checked pending confirmation marker");

    Ok(pending)
}

/// Tells a freshly signed-up user to finish verification by email.
#[component]
pub fn ConfirmPage() -> impl IntoView {
    let pending = Resource::new(|| (), |_| pending_confirmation());

    view! {
        <Title text="Confirm Sign Up"/>
        <div class="confirm-page">
            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || {
                    pending.get().map(|result| {
                        match result {
                            Ok(true) => view! {
                                <div class="confirm-box">
                                    <h1>"Check your email"</h1>
                                    <p>"We sent you a verification code. Follow it to finish creating your account."</p>
                                    <a href=routes::SIGN_IN rel="external" class="link-button">"Sign in"</a>
                                </div>
                            }.into_any(),
                            Ok(false) | Err(_) => view! {
                                <div class="confirm-box">
                                    <p>"There is no sign-up waiting for confirmation."</p>
                                    <a href=routes::SIGN_UP class="link-button">"Sign up"</a>
                                </div>
                            }.into_any(),
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
