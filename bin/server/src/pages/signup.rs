//! Sign-up page component and the account creation server function.

use crate::routes;
use crate::signup::{PendingConfirmationMarker, SignUpEffects, submit_sign_up};
use crate::types::{SignUpFailure, SignUpRequest, UserInfo};
use crate::user::get_current_user;
use async_trait::async_trait;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;

/// Server function creating an account with the identity provider.
///
/// Only username, email and password travel; the confirmation field stays
/// in the browser.
#[server]
pub async fn register_account(
    username: String,
    email: String,
    password: String,
) -> Result<(), ServerFnError> {
    use crate::error::AccountError;
    use axum::Extension;
    use quickui_identity::CognitoClient;
    use std::sync::Arc;

    let Extension(provider): Extension<Arc<CognitoClient>> = leptos_axum::extract()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Identity provider missing from request");
            AccountError::MissingProvider.into_server_error()
        })?;

    create_account(provider.as_ref(), username, email, password).await
}

/// Forwards a sign-up to the provider and maps any failure to what the
/// browser should show.
#[cfg(feature = "ssr")]
pub(crate) async fn create_account<P>(
    provider: &P,
    username: String,
    email: String,
    password: String,
) -> Result<(), ServerFnError>
where
    P: quickui_identity::IdentityProvider + ?Sized,
{
    use crate::error::AccountError;
    use quickui_identity::AccountRegistration;

    let registration = AccountRegistration::new(username.clone(), password, email);
    let outcome = provider.sign_up(&registration).await.map_err(|report| {
        let err = AccountError::from_report(&report);
        match &err {
            AccountError::Rejected { .. } => {
                tracing::info!(username = %username, error = %err, "Sign-up rejected");
            }
            _ => {
                tracing::error!(username = %username, error = %report, "Sign-up failed");
            }
        }
        err.into_server_error()
    })?;

    tracing::info!(
        username = %username,
        user_sub = %outcome.user_sub,
        user_confirmed = outcome.user_confirmed,
        "Account created"
    );

    Ok(())
}

/// Where a render should send the visitor, given the session lookup so far.
///
/// Only a reported signed-in user redirects; a pending lookup, no user, or a
/// failed lookup all leave the form in place.
fn signed_in_redirect(
    user: Option<Result<Option<UserInfo>, ServerFnError>>,
) -> Option<&'static str> {
    match user {
        Some(Ok(Some(_))) => Some(routes::HOME),
        _ => None,
    }
}

/// Which form value an input feeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Username,
    Email,
    Password,
    PasswordConfirmation,
}

/// One input of the sign-up form.
#[derive(Clone, Copy, Debug)]
pub struct FormField {
    pub kind: FieldKind,
    pub name: &'static str,
    pub input_type: &'static str,
    pub placeholder: &'static str,
    pub required: bool,
}

/// The sign-up inputs in display order.
///
/// `required` is the only thing standing between empty fields and the
/// submit handler: the browser refuses to submit until all are filled.
pub const SIGN_UP_FIELDS: [FormField; 4] = [
    FormField {
        kind: FieldKind::Username,
        name: "username",
        input_type: "text",
        placeholder: "Username",
        required: true,
    },
    FormField {
        kind: FieldKind::Email,
        name: "email",
        input_type: "email",
        placeholder: "E-mail",
        required: true,
    },
    FormField {
        kind: FieldKind::Password,
        name: "password",
        input_type: "password",
        placeholder: "Password",
        required: true,
    },
    FormField {
        kind: FieldKind::PasswordConfirmation,
        name: "password_confirmation",
        input_type: "password",
        placeholder: "Confirm Password",
        required: true,
    },
];

/// Button classes. "disabled" is cosmetic; the button stays clickable.
fn submit_button_class(submitting: bool) -> &'static str {
    if submitting {
        "submit-button disabled"
    } else {
        "submit-button"
    }
}

/// Live values of the four inputs.
#[derive(Clone, Copy)]
struct SignUpForm {
    username: RwSignal<String>,
    email: RwSignal<String>,
    password: RwSignal<String>,
    password_confirmation: RwSignal<String>,
}

impl SignUpForm {
    fn new() -> Self {
        Self {
            username: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            password_confirmation: RwSignal::new(String::new()),
        }
    }

    fn field(&self, kind: FieldKind) -> RwSignal<String> {
        match kind {
            FieldKind::Username => self.username,
            FieldKind::Email => self.email,
            FieldKind::Password => self.password,
            FieldKind::PasswordConfirmation => self.password_confirmation,
        }
    }

    fn request(&self) -> SignUpRequest {
        SignUpRequest {
            username: self.username.get_untracked(),
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
            password_confirmation: self.password_confirmation.get_untracked(),
        }
    }
}

/// Submit effects backed by page signals, the router and `document.cookie`.
struct BrowserEffects<N> {
    submitting: RwSignal<bool>,
    error: RwSignal<Option<SignUpFailure>>,
    navigate: N,
}

#[async_trait(?Send)]
impl<N> SignUpEffects for BrowserEffects<N>
where
    N: Fn(&str, NavigateOptions),
{
    async fn create_account(&self, request: &SignUpRequest) -> Result<(), SignUpFailure> {
        register_account(
            request.username.clone(),
            request.email.clone(),
            request.password.clone(),
        )
        .await
        .map_err(SignUpFailure::from_server_error)
    }

    fn set_submitting(&self, submitting: bool) {
        self.submitting.set(submitting);
    }

    fn set_error(&self, failure: SignUpFailure) {
        self.error.set(Some(failure));
    }

    fn write_marker(&self, marker: PendingConfirmationMarker) {
        write_document_cookie(&marker.cookie().to_string());
    }

    fn navigate(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }
}

#[cfg(feature = "hydrate")]
fn write_document_cookie(cookie: &str) {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.dyn_into::<web_sys::HtmlDocument>().ok());

    match document {
        Some(document) => {
            if let Err(e) = document.set_cookie(cookie) {
                leptos::logging::warn!("failed to write cookie: {:?}", e);
            }
        }
        None => leptos::logging::warn!("no HTML document to write cookie to"),
    }
}

// Submit handlers only run in the browser.
#[cfg(not(feature = "hydrate"))]
fn write_document_cookie(_cookie: &str) {}

/// Sign-up page.
#[component]
pub fn SignUpPage() -> impl IntoView {
    let user = Resource::new(|| (), |_| get_current_user());
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(Option::<SignUpFailure>::None);
    let form = SignUpForm::new();
    let navigate = use_navigate();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let effects = BrowserEffects {
            submitting,
            error,
            navigate: navigate.clone(),
        };
        let request = form.request();
        spawn_local(async move {
            submit_sign_up(&effects, request).await;
        });
    };

    view! {
        <Title text="Sign Up"/>
        // Signed-in users have nothing to do here; re-checked on every render.
        <Suspense fallback=|| ()>
            {move || {
                signed_in_redirect(user.get()).map(|path| view! { <Redirect path=path/> })
            }}
        </Suspense>
        <a href=routes::HOME class="back-link">"Back to search"</a>
        <div class="signup-page">
            <div class="signup-aside"></div>
            <div class="signup-main">
                <form class="signup-form" on:submit=on_submit>
                    {move || error.get().map(|failure| view! {
                        <div class="error-banner">
                            <p>{failure.message}</p>
                        </div>
                    })}
                    <h1>"QuickUI"</h1>
                    {SIGN_UP_FIELDS.iter().map(|field| {
                        let value = form.field(field.kind);
                        view! {
                            <input
                                type=field.input_type
                                name=field.name
                                class="form-input"
                                placeholder=field.placeholder
                                required=field.required
                                autocomplete="off"
                                prop:value=move || value.get()
                                on:input=move |ev| value.set(event_target_value(&ev))
                            />
                        }
                    }).collect_view()}
                    <button type="submit" class=move || submit_button_class(submitting.get())>
                        "Sign Up"
                    </button>
                    <div class="form-links">
                        <a href=routes::SIGN_IN rel="external">"Already have an account? Sign In"</a>
                    </div>
                </form>
            </div>
        </div>
    }
}
