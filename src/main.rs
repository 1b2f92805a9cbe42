#![allow(warnings)]
//! Taskboard Frontend Entry Point

mod app;
mod components;
mod context;
mod http;
mod logging;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
