//! # marketplace-client
//!
//! Leptos + WASM frontend for the food marketplace storefront. Replaces the
//! old jQuery + Google-widget page glue with a Rust-native UI layer:
//! typed cart responses, a places/geocoding client, and plain state
//! reducers that are testable without a browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic reporting, console logging, and hydrate
/// the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
