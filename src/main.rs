//! Chore Board Frontend Entry Point

mod config;
mod logger;
mod notify;
mod commands;
mod context;
mod store;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    logger::init(config.log_level);
    log::info!("chore board starting, backend at {}", config.api_url);

    mount_to_body(move || view! { <App config=config /> });
}
