//! Home page component.

use crate::routes;
use crate::user::get_current_user;
use leptos::prelude::*;

/// The home page component.
#[component]
pub fn HomePage() -> impl IntoView {
    let user = Resource::new(|| (), |_| get_current_user());

    view! {
        <div class="home-page">
            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || {
                    user.get().map(|result| {
                        match result {
                            Ok(Some(user_info)) => view! {
                                <div>
                                    <h1>{format!("Welcome, {}!", user_info.username)}</h1>
                                </div>
                            }.into_any(),
                            Ok(None) | Err(_) => view! {
                                <div>
                                    <h1>"QuickUI"</h1>
                                    <a href=routes::SIGN_UP class="cta-button">"Sign up"</a>
                                    <a href=routes::SIGN_IN rel="external" class="link-button">"Sign in"</a>
                                </div>
                            }.into_any(),
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
