//! Daily Planner Frontend Entry Point

mod actions;
mod app;
mod commands;
mod components;
mod config;
mod context;
mod dashboard;
mod error;
mod logging;
mod models;
mod notice;
mod page;
mod store;

#[cfg(test)]
mod test_support;

use app::App;
use config::PlannerConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);

    let config = PlannerConfig::load();
    logging::set_level(config.level_filter());
    log::info!("Mounting planner (api base {:?})", config.api_base);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
