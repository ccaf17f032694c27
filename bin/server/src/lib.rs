//! QuickUI web server and sign-up UI.
//!
//! This crate provides the Leptos-based sign-up flow. Account creation and
//! session lookup are delegated to an external identity provider through
//! server functions.

#![allow(non_snake_case)]

pub mod app;
#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod error;
pub mod pages;
pub mod routes;
pub mod signup;
#[cfg(all(test, feature = "ssr"))]
mod test_support;
pub mod types;
pub mod user;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
