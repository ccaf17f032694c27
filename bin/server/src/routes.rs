//! Client-side route paths.

/// Landing page; signed-in users are sent here.
pub const HOME: &str = "/";

/// The sign-up form.
pub const SIGN_UP: &str = "/signup";

/// Shown after a successful sign-up while the account awaits verification.
pub const CONFIRM: &str = "/confirm";

/// Sign-in, served outside this application.
pub const SIGN_IN: &str = "/signin";
