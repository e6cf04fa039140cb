//! # client
//!
//! Leptos + WASM frontend for the FoodShare donation marketplace: donors post
//! surplus food, receivers find it on a map and claim it.
//!
//! This crate contains pages, components, application state (auth session,
//! donation list, toasts), the REST and geocoding clients, and the Leaflet
//! map bridge. Wire types and role rules live in the `domain` crate.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    log::info!("foodshare client {} hydrating", env!("CARGO_PKG_VERSION"));
    leptos::mount::hydrate_body(app::App);
}
