//! # book-alley
//!
//! Leptos + WASM client for browsing a static book catalog. Cards link to a
//! per-book detail page where books can be marked read or wishlisted; both
//! lists live in `localStorage`.
//!
//! Domain rules live in the `catalog` crate. This crate holds pages,
//! components, context state, and the browser glue (`fetch`,
//! `localStorage`, timers), the latter compiled only with the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use app::App;
    use leptos::prelude::*;

    let config = config::AppConfig::from_build_env();
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(config.log_level) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    log::info!("catalog at {}, toasts {} ms", config.catalog_url, config.toast_timeout_ms);
    leptos::mount::mount_to_body(move || view! { <App config=config.clone()/> });
}
