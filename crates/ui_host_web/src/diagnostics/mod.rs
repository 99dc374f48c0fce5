//! Browser-side layout sampling and console reporting for responsive diagnostics.

/// Console-backed [`ui_host::DiagnosticsSink`].
pub mod console;
/// DOM-backed [`ui_host::LayoutProbe`].
pub mod probe;
