//! # client
//!
//! Leptos + WASM front end for the eldercare administration app.
//!
//! This crate holds the root component, the route gate and its policy, the
//! role-aware shell (sidebar + navbar), the route-level pages, and the REST
//! client they share. The `server` crate renders it with SSR and the browser
//! hydrates it through [`hydrate`].

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
