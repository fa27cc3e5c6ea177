//! # panel-site
//!
//! Leptos + WASM frontend for the course site shell.
//!
//! The shell renders two independent pieces of chrome that must agree on
//! whether the navigation panel is open: [`components::app_sidebar`] owns the
//! state, [`components::content_frame`] mirrors it to size the content area.
//! Neither references the other; they converge through the `panel` crate's
//! persisted record and change notifications.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
