use leptos::prelude::*;
use selfokrs_ui::App;

fn main() {
    // Readable panics in the browser console
    console_error_panic_hook::set_once();

    tracing_wasm::set_as_global_default();

    mount_to_body(App);
}
