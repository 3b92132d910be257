//! # portfolio
//!
//! Leptos + WASM personal portfolio: four routed sections over animated
//! star-field backgrounds, a custom cursor, a zoom lens for project
//! screenshots, and a contact form relayed through EmailJS.
//!
//! Rendering and browser glue live here; the geometry and gesture state
//! machines live in the browser-free `motion` crate so they test natively.
//! Everything that touches `web_sys` is gated behind the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging, add resource hints, mount the app.
#[cfg(feature = "csr")]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("logger already initialised");
    }
    util::preload::add_resource_hints();
    leptos::mount::mount_to_body(app::App);
}
