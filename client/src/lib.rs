//! # client
//!
//! Leptos + WASM frontend for floating note fragments.
//!
//! The browser-independent panel logic lives in the `panels` crate; this
//! crate supplies its browser collaborators (`localStorage` layout store,
//! HTTP fragment fetcher) and renders the panels with Leptos components.
//! Browser-only code is gated behind the `csr` feature so the crate still
//! builds and tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the panel layer on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
