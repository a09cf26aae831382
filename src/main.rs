//! Eden Care CRM Frontend Entry Point

mod models;
mod data;
mod search;
mod nav;
mod format;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
