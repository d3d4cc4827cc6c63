//! # client
//!
//! Leptos + WASM frontend for the storyboard planning studio.
//!
//! The page collects a creative brief, asks the server for two storyboard
//! variants, and renders the active one as a draggable shot gallery plus the
//! full markdown document. Parsing and gesture logic live in the
//! `storyboard` crate; this crate owns reactive state, DOM wiring, and HTTP.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
