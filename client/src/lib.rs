//! # lms-client
//!
//! Leptos + WASM front-end for the learning management system.
//!
//! This crate contains pages, components, application state, wire types and
//! the HTTP adapter for the external REST backend. The `session` store in
//! `state` owns authentication: restore on startup, periodic token refresh
//! and liveness checks, inactivity expiry, and idempotent logout.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    util::dark_mode::apply(util::dark_mode::read_preference());
    leptos::mount::hydrate_body(app::App);
}
