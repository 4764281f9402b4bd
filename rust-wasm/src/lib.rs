use wasm_bindgen::prelude::*;

pub mod common;
pub mod session;

pub use session::WasmViewerSession;

// Enable panic hooks for debugging
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
}

/// Get the version of the library
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
