//! # gearforge
//!
//! Leptos + WASM equipment planner for an action RPG. Players inspect
//! equipment slots, browse item bases and their stat rolls, and preview
//! crafting options and modifier pools served by a hosted PostgREST store.
//!
//! This crate contains pages, components, application state, and the store
//! read layer. Query shapes come from the `storeq` crate so every request is
//! schema-checked at construction time.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and mounts the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(crate::app::App);
}
