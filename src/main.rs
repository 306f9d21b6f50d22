#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

use dioxus_logger::tracing::{info, Level};
use product_editor::app::App;

fn main() {
    // Init logger
    dioxus_logger::init(Level::DEBUG).expect("logger failed to init");
    info!("starting app");

    dioxus::launch(App);
}
