//! Pokedex Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod logging;
mod store;
mod surface;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = config::load();
    logging::init(config.level_filter());
    log::info!("catalog at {}", config.list_endpoint());
    mount_to_body(move || view! { <App config=config /> });
}
