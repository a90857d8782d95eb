//! Goal Tracker Frontend Entry Point

mod actions;
mod api;
mod app;
mod browser;
mod collection;
mod components;
mod context;
mod logging;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
