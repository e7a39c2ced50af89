//! # myclean-client
//!
//! Leptos + WASM front end for the MyClean service marketplace. Replaces the
//! Vue 3 `frontend/` with a Rust-native routing, auth-state, and REST layer.
//!
//! This crate contains pages, components, the route/guard model, the shared
//! authentication store, and the typed REST client. Guard resolution and all
//! state transitions are pure so they run under native `cargo test`; browser
//! calls (`gloo-net`, `localStorage`) are gated behind the `hydrate` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: install the panic hook, wire `log` to the console,
/// and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
