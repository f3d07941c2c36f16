//! Organization Pages Frontend Entry Point

mod app;
mod chips;
mod commands;
mod components;
mod config;
mod context;
mod member_view;
mod models;
mod roster;
mod store;
mod validation;

use app::App;
use config::{PageConfig, MOUNT_ROOT_ID};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    let config = PageConfig::load();
    commands::init_sidebar();

    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_ROOT_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    match root {
        Some(root) => {
            web_sys::console::log_1(&format!("[APP] Mounting into #{}", MOUNT_ROOT_ID).into());
            leptos::mount::mount_to(root, move || view! { <App config=config /> }).forget();
        }
        None => {
            web_sys::console::warn_1(&format!("[APP] #{} not found, mounting to body", MOUNT_ROOT_ID).into());
            mount_to_body(move || view! { <App config=config /> });
        }
    }
}
