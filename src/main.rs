//! User Details Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

const APP_NAME: &str = "UserDetails";

fn main() {
    console_error_panic_hook::set_once();

    let loaded = config::load_config();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    if console_logger::init_logger(APP_NAME, config.log_level).is_ok() {
        if let Err(e) = &loaded {
            log::warn!("Ignoring invalid config, using defaults: {}", e);
        }
        log::info!("Starting with storage key '{}'", config.storage_key);
    }

    mount_to_body(move || view! { <App config=config /> });
}
