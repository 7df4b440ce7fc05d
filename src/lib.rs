//! Hadassa IA - sales landing page
//!
//! Server-rendered with Leptos and hydrated in the browser for the few
//! interactive bits: the scroll-aware navbar, reveal-on-view entrances and
//! the FAQ answers.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
