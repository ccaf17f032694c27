//! The sign-up submission sequence.
//!
//! [`submit_sign_up`] runs the whole submit handler as a straight line of
//! awaited steps against a [`SignUpEffects`] implementation. The page wires
//! it to signals, the router and `document.cookie`; tests wire it to a
//! recorder.
//!
//! On success the order is fixed: `submitting = true`, marker written,
//! navigate to [`routes::CONFIRM`], `submitting = false`. Because the flag
//! is only raised after the provider has answered, it never covers the
//! in-flight request.

use crate::routes;
use crate::types::{SignUpFailure, SignUpRequest};
use async_trait::async_trait;
use cookie::{Cookie, SameSite};

/// Name of the pending-confirmation cookie.
pub const CONFIRM_COOKIE: &str = "confirm";

/// Value written to the pending-confirmation cookie.
pub const CONFIRM_COOKIE_VALUE: &str = "true";

/// Client-side flag telling the confirmation view a sign-up just happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingConfirmationMarker;

impl PendingConfirmationMarker {
    /// The cookie as written by the browser: strict same-site, whole-site
    /// path, no expiry.
    pub fn cookie(&self) -> Cookie<'static> {
        Cookie::build((CONFIRM_COOKIE, CONFIRM_COOKIE_VALUE))
            .path("/")
            .same_site(SameSite::Strict)
            .build()
    }

    /// Returns true if a cookie value read back from a request is the marker.
    pub fn matches(value: &str) -> bool {
        value == CONFIRM_COOKIE_VALUE
    }
}

/// Everything the submit handler touches outside itself.
#[async_trait(?Send)]
pub trait SignUpEffects {
    /// Forwards username, password and email to the identity provider.
    async fn create_account(&self, request: &SignUpRequest) -> Result<(), SignUpFailure>;

    fn set_submitting(&self, submitting: bool);

    fn set_error(&self, failure: SignUpFailure);

    fn write_marker(&self, marker: PendingConfirmationMarker);

    fn navigate(&self, path: &str);
}

/// Runs one sign-up submission to completion.
///
/// Never fails: a rejection ends as a visible error with the flag lowered.
pub async fn submit_sign_up<E>(effects: &E, request: SignUpRequest)
where
    E: SignUpEffects + ?Sized,
{
    match effects.create_account(&request).await {
        Ok(()) => {
            effects.set_submitting(true);
            effects.write_marker(PendingConfirmationMarker);
            effects.navigate(routes::CONFIRM);
            effects.set_submitting(false);
        }
        Err(failure) => {
            effects.set_error(failure);
            effects.set_submitting(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        CreateAccount(SignUpRequest),
        Submitting(bool),
        Error(String),
        Marker(String),
        Navigate(String),
    }

    struct Recorder {
        result: Result<(), SignUpFailure>,
        events: RefCell<Vec<Event>>,
    }

    impl Recorder {
        fn succeeding() -> Self {
            Self {
                result: Ok(()),
                events: RefCell::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                result: Err(SignUpFailure::new(message)),
                events: RefCell::new(Vec::new()),
            }
        }

        fn events(&self) -> Vec<Event> {
            self.events.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl SignUpEffects for Recorder {
        async fn create_account(&self, request: &SignUpRequest) -> Result<(), SignUpFailure> {
            self.events
                .borrow_mut()
                .push(Event::CreateAccount(request.clone()));
            self.result.clone()
        }

        fn set_submitting(&self, submitting: bool) {
            self.events.borrow_mut().push(Event::Submitting(submitting));
        }

        fn set_error(&self, failure: SignUpFailure) {
            self.events.borrow_mut().push(Event::Error(failure.message));
        }

        fn write_marker(&self, marker: PendingConfirmationMarker) {
            let cookie = marker.cookie();
            self.events
                .borrow_mut()
                .push(Event::Marker(cookie.value().to_string()));
        }

        fn navigate(&self, path: &str) {
            self.events.borrow_mut().push(Event::Navigate(path.to_string()));
        }
    }

    fn filled_request() -> SignUpRequest {
        SignUpRequest {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "hunter22".to_string(),
            password_confirmation: "hunter22".to_string(),
        }
    }

    #[test]
    fn success_writes_marker_then_navigates_to_confirm() {
        let recorder = Recorder::succeeding();
        let request = filled_request();

        block_on(submit_sign_up(&recorder, request.clone()));

        assert_eq!(
            recorder.events(),
            vec![
                Event::CreateAccount(request),
                Event::Submitting(true),
                Event::Marker("true".to_string()),
                Event::Navigate("/confirm".to_string()),
                Event::Submitting(false),
            ]
        );
    }

    #[test]
    fn rejection_shows_message_without_marker_or_navigation() {
        let recorder = Recorder::failing("User already exists");
        let request = filled_request();

        block_on(submit_sign_up(&recorder, request.clone()));

        assert_eq!(
            recorder.events(),
            vec![
                Event::CreateAccount(request),
                Event::Error("User already exists".to_string()),
                Event::Submitting(false),
            ]
        );
    }

    #[test]
    fn mismatched_confirmation_is_still_submitted() {
        let recorder = Recorder::succeeding();
        let request = SignUpRequest {
            password_confirmation: "something-else".to_string(),
            ..filled_request()
        };

        block_on(submit_sign_up(&recorder, request.clone()));

        let events = recorder.events();
        assert_eq!(events.first(), Some(&Event::CreateAccount(request)));
        assert!(events.contains(&Event::Navigate("/confirm".to_string())));
    }

    #[test]
    fn submitting_is_not_raised_before_the_provider_answers() {
        let recorder = Recorder::failing("Network error");

        block_on(submit_sign_up(&recorder, filled_request()));

        assert!(!recorder.events().contains(&Event::Submitting(true)));
    }

    #[test]
    fn marker_cookie_is_strict_same_site() {
        let cookie = PendingConfirmationMarker.cookie();
        assert_eq!(cookie.name(), "confirm");
        assert_eq!(cookie.value(), "true");
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), None);
        assert!(cookie.expires().is_none());

        let rendered = cookie.to_string();
        assert!(rendered.starts_with("confirm=true"));
        assert!(rendered.contains("SameSite=Strict"));
    }

    #[test]
    fn marker_matches_only_true() {
        assert!(PendingConfirmationMarker::matches("true"));
        assert!(!PendingConfirmationMarker::matches("false"));
        assert!(!PendingConfirmationMarker::matches(""));
    }
}
