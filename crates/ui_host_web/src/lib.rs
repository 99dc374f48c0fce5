//! Browser (`wasm32`) implementations of [`ui_host`] service contracts.
//!
//! Adapters compile on every target; outside `wasm32` they degrade to inert fallbacks so the
//! runtime crate and its tests build natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod clipboard;
pub mod diagnostics;
mod interop;
pub mod scheduler;

pub use adapters::{
    clipboard_service, diagnostics_sink, host_services, layout_probe, scheduler, WebHostServices,
};
pub use clipboard::WebClipboardService;
pub use diagnostics::{console::ConsoleDiagnosticsSink, probe::DomLayoutProbe};
pub use scheduler::WebScheduler;
