//! # client
//!
//! Leptos + WASM frontend for the WebiDelivery authentication screen.
//!
//! This crate contains the login, signup and password-recovery forms, their
//! validation rules and schemas, the form controllers that guard submission,
//! and the mock submission handlers standing in for the auth backend.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic and log hooks, then hydrates the
/// server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
