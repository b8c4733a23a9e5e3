//! # activity-board
//!
//! Leptos + WASM client for the school activities sign-up board.
//!
//! The client fetches the activity catalog from the backend's REST API,
//! renders it as cards with client-side search, sort, and category filtering,
//! and submits sign-up and unregister requests with transient feedback.
//!
//! Build for the browser with the `csr` feature; without it the crate compiles
//! natively with browser calls stubbed out, which is how the tests run.

pub mod actions;
pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: logging, panic hook, config, then mount `App`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;
    use crate::config::ClientConfig;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = ClientConfig::from_build_env().unwrap_or_else(|e| {
        leptos::logging::warn!("{e}; falling back to default configuration");
        ClientConfig::default()
    });
    log::info!("activity board starting, api base {:?}", config.api_base);

    leptos::mount::mount_to_body(move || view! { <App config=config/> });
}
