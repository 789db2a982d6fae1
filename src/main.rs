//! Travel List Frontend Entry Point

mod app;
mod components;
mod config;
mod draft;
mod ids;
mod logging;
mod models;
mod packing;
mod stats;
mod store;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(LevelFilter::Debug);
    mount_to_body(App);
}
