//! Typed host-service contracts shared by the page runtime and its browser adapters.
//!
//! This crate is the API-first boundary for everything the runtime needs from its environment:
//! timers, clipboard access, and layout sampling/reporting for responsive diagnostics. Concrete
//! browser adapters live in `ui_host_web`; the in-memory adapters here back native unit tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod clipboard;
pub mod diagnostics;
pub mod scheduler;

pub use clipboard::{
    ClipboardFuture, ClipboardService, MemoryClipboardService, UnavailableClipboardService,
};
pub use diagnostics::{
    DiagnosticCheck, DiagnosticReport, DiagnosticsSink, ElementBoxSample, Finding, ImageSample,
    LayoutProbe, LoadTiming, MemoryDiagnosticsSink, Severity, StaticLayoutProbe, TextSample,
    TouchTargetSample, ViewportSize,
};
pub use scheduler::{ManualScheduler, Scheduler, TimerHandle, TimerTask};
