//! # client
//!
//! Leptos + WASM single-page interface for the assessment recommender.
//!
//! The page holds one `RwSignal<RecommendState>` from the `recommend` crate;
//! components read a memoized `Screen` derived from it and never touch the
//! network themselves. Only `net::api` talks to the recommendation service.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;

/// WASM entry point: installs logging and mounts [`app::App`] on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
