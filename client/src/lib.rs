//! # client
//!
//! Leptos + WASM front-end for EduPath, an educational-guidance product for
//! Cameroonian students. Replaces the React `edupath-frontend/` with a
//! Rust-native UI layer.
//!
//! Pages render marketing and account screens; session and language state
//! live in context signals mirrored to browser storage; backend calls go
//! through service traits in `net` with mock implementations wired at the
//! composition root until the real API ships.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic + console logging and hydrates the
/// server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
