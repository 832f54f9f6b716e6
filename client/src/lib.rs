//! # client
//!
//! Leptos + WASM frontend for the Solace social platform.
//!
//! This crate contains pages, components, application state, network types,
//! the REST API layer, and the websocket live client. Persistence and
//! business logic live behind the platform's HTTP + websocket API; this is a
//! presentation-layer application whose one recurring piece of machinery is
//! the paginated, realtime-reconciled list (see the `livelist` crate).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydration entry point invoked from the generated JS shim.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
