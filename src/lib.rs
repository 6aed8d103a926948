//! # bank-portal
//!
//! Leptos + WASM frontend for the bank's customer portal: sign-in, profile
//! view/edit, and client-side route protection over the user REST API.
//!
//! Layering, leaf-first: `config` and `error`, `util::token_storage`, the
//! `net` client wrapper and typed API calls, the `state` store, the
//! `session` flows (bootstrap, login, profile), and finally `pages` and
//! `components` wired together in `app`.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_helpers;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    leptos::mount::hydrate_body(app::App);
}
