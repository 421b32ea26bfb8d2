//! TonyWallet web client
//!
//! Sign up, sign in, and manage a naira wallet: balance, funding and
//! transaction history against the wallet REST API.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log_level()));
    log::info!("TonyWallet starting");

    hide_loading_screen();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

fn log_level() -> log::Level {
    match option_env!("WALLET_LOG_LEVEL").map(str::to_ascii_lowercase).as_deref() {
        Some("trace") => log::Level::Trace,
        Some("debug") => log::Level::Debug,
        Some("warn") => log::Level::Warn,
        Some("error") => log::Level::Error,
        _ => log::Level::Info,
    }
}

/// Remove the static loading placeholder shipped in index.html
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available");
        return;
    };
    match document.get_element_by_id("app-loading") {
        Some(element) => element.remove(),
        None => log::debug!("Loading element not found"),
    }
}
