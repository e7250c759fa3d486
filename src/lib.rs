//! blockpad client — block-editor UI fragment.
//!
//! SYSTEM CONTEXT
//! ==============
//! Implements the document header and contextual reusable-block actions
//! of a block-based content editor as thin views over shared reactive
//! stores. Persistence and block editing proper live server-side behind
//! the `net` boundary.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
