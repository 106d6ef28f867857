//! WebAssembly entry point.

use wasm_bindgen::prelude::*;

/// Install logging and mount every declared widget on the page.
#[wasm_bindgen(start)]
pub fn start() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("Failed to initialize logger: {}", e).into());
    }

    log::info!("Starting Hoverline (WASM)");

    let mounted = crate::registry::mount_all();
    log::info!("{} widgets mounted", mounted);
}
