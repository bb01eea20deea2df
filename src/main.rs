//! Productivity Oasis Frontend Entry Point

mod app;
mod audio;
mod background;
mod components;
mod config;
mod context;
mod error;
mod models;
mod scheduler;
mod store;
mod tasks;
mod timer;
mod web;

use app::App;
use config::OasisConfig;
use leptos::prelude::*;
use log::LevelFilter;
use store::AppState;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    if let Err(err) = console_logger::init(level) {
        web_sys::console::error_1(&format!("[APP] logger not installed: {}", err).into());
    }

    let config = OasisConfig::load();
    let state = match AppState::new(&config) {
        Ok(state) => state,
        Err(err) => {
            log::error!("[APP] cannot start: {}", err);
            return;
        }
    };

    mount_to_body(move || view! { <App config=config state=state /> });
}
