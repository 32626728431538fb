//! # portfolio
//!
//! Single-page personal portfolio, built with Leptos and rendered
//! client-side as WebAssembly. Static profile content plus a small state
//! layer: persisted light/dark theme with a system-preference fallback,
//! one-shot scroll reveals, active-section nav highlighting, and a contact
//! form posting to an external API.
//!
//! Browser-only code is gated behind the `csr` feature; with default
//! features the crate compiles on the host and the state layer is covered
//! by plain `cargo test`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: console diagnostics, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(crate::app::App);
}
