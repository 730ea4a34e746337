//! # client
//!
//! Leptos + WASM frontend for LearnDeck, a mobile-first learning platform.
//!
//! This crate contains pages, application state orchestration, the
//! Supabase auth gateway, and the localStorage session store. The auth
//! state machine and route guard themselves live in the `authflow` crate
//! so they stay free of UI-framework dependencies.

pub mod app;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrates the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Init fails only when called twice, which a no-op covers.
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
