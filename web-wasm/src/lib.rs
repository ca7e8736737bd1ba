//! Defect Inspector Web App (Leptos + WASM)

mod app;
mod components;
mod storage;
pub mod api;
pub mod handler;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
