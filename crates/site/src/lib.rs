//! Browser entry for the page UI runtime.
//!
//! Re-exports the runtime so its `wasm-bindgen` exports (`toast_*`, `modal_*`,
//! `copy_to_clipboard`, `window.responsiveDebug`) land in the generated bindings.

pub use ui_runtime;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    ui_runtime::host::boot();
}
