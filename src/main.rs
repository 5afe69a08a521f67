#![allow(warnings)]
//! Portfolio Frontend Entry Point

mod analytics;
mod app;
mod components;
mod context;
mod dom;
mod modal;
mod models;
mod storage;
mod store;
mod submit;
mod validate;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
