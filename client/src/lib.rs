//! AI IQ web client.
//!
//! ARCHITECTURE
//! ============
//! A Leptos app compiled twice: with `ssr` it is rendered by the `server`
//! crate, with `hydrate` it ships as WASM and takes over in the browser.
//! Routes map to `pages`, which compose `components` and keep their run state
//! in `state` types. Every rule (question selection, scoring, game AIs) is
//! delegated to the `engine` crate. Browser-only concerns live in `util` and
//! compile to no-ops outside the browser.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating ai-iq client");
    leptos::mount::hydrate_body(app::App);
}
