//! Page components for the application.
//!
//! Each page is a Leptos component that renders a specific route,
//! along with any server functions specific to that page.

pub mod confirm;
pub mod home;
pub mod signup;

pub use confirm::ConfirmPage;
pub use home::HomePage;
pub use signup::SignUpPage;
