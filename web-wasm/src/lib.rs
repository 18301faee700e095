//! PDF AI Web App (Leptos + WASM)

mod api;
mod app;
mod components;
mod view;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
