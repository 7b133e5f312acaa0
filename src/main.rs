//! Storefront Frontend Entry Point

mod app;
mod components;
mod context;
mod notify;
mod scanner;
mod store;

use app::App;
use leptos::prelude::*;
use storefront_core::StorefrontConfig;

fn main() {
    console_error_panic_hook::set_once();

    let config = StorefrontConfig::from_build_env();
    if let Some(level) = config.log_level.to_level() {
        _ = console_log::init_with_level(level);
    }
    log::info!("storefront starting, backend at {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
