//! Vibe Board Frontend Entry Point

use leptos::prelude::*;
use vibe_board_ui::app::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();
    mount_to_body(App);
}
