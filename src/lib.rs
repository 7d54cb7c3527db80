//! # folio
//!
//! Leptos + WASM client for a single-page personal portfolio: section
//! navigation, a persisted light/dark theme, a validated contact form with
//! EmailJS delivery, and a filterable project gallery.
//!
//! Page state lives in small models under [`state`], each testable without a
//! browser. [`components`] render the page and derive every DOM class from
//! those models. Browser-only glue (storage, timers, HTTP) sits behind the
//! `csr` feature and degrades to no-ops in native builds.
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Root component and context providers |
//! | [`components`] | Controls, sections, contact form, gallery |
//! | [`state`] | Theme, navigation, form, feedback and filter models |
//! | [`net`] | EmailJS delivery |
//! | [`util`] | Storage, timers, validation, anchor handling |
//! | [`config`] | Build-time site configuration |
//! | [`content`] | Static section and gallery data |

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod net;
pub mod state;
pub mod util;

/// Browser entry point: install panic and log hooks, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
