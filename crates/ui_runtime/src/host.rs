//! Browser installers that bind the headless runtime to the page DOM.
//!
//! Each installer scans the document once at boot, attaches listeners, and routes user input into
//! the shared [`UiController`](crate::controller::UiController) or the pure helpers in the
//! sibling modules. Missing targets are skipped silently.

mod boot;
mod debug;
mod decor;
mod dom;
pub mod exports;
mod forms;
mod modals;
mod observers;
mod surface;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub use boot::boot;
pub use boot::{install_page, load_config};
pub use debug::ResponsiveDebugHandle;
pub use surface::{DomSurface, FOCUSABLE_SELECTOR};
