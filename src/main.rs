//! Shopping List Frontend Entry Point

mod app;
mod components;
mod logger;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init();
    log::info!("starting shopping list");
    mount_to_body(App);
}
