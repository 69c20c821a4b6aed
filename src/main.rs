//! Todo-UI Frontend Entry Point

mod app;
mod model;
mod styles;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
