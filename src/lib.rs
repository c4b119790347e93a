//! 82 Labs marketing site
//!
//! A single-page marketing website with animated visual sections, a
//! contact-request modal, and a small API that emails and persists lead
//! submissions. Built with Leptos and WebAssembly, served with axum.

#![recursion_limit = "2048"]

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
