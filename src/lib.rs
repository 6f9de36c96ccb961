//! # tripnest
//!
//! Leptos + WASM frontend for booking hotels, car rentals, restaurants,
//! activities, and tour packages against a remote REST backend.
//!
//! This crate contains pages, components, client-side state containers
//! (session, cart, route-driven filter), the rental pricing and validation
//! logic, and the REST client. Everything outside `hydrate`-gated blocks
//! builds and tests natively.

pub mod app;
pub mod booking;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
