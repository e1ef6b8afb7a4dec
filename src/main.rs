//! Dynamic Form Frontend Entry Point

mod app;
mod components;
mod context;
mod form;
mod logging;
mod models;
mod notice;
mod records;
mod registry;
mod settings;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = logging::init(settings::current().log_level()) {
        web_sys::console::warn_1(&format!("logger already set: {}", e).into());
    }
    mount_to_body(App);
}
