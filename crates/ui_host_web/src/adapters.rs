use std::rc::Rc;

use ui_host::{ClipboardService, DiagnosticsSink, LayoutProbe, Scheduler};

use crate::{ConsoleDiagnosticsSink, DomLayoutProbe, WebClipboardService, WebScheduler};

/// Builds the browser timer scheduler.
pub fn scheduler() -> WebScheduler {
    WebScheduler::new()
}

/// Builds the browser clipboard adapter.
pub fn clipboard_service() -> WebClipboardService {
    WebClipboardService
}

/// Builds the DOM layout probe used by responsive diagnostics.
pub fn layout_probe() -> DomLayoutProbe {
    DomLayoutProbe
}

/// Builds the console diagnostics sink.
pub fn diagnostics_sink() -> ConsoleDiagnosticsSink {
    ConsoleDiagnosticsSink
}

#[derive(Clone)]
/// Browser host-service bundle injected into the page runtime at boot.
pub struct WebHostServices {
    /// Timer service.
    pub scheduler: Rc<dyn Scheduler>,
    /// Clipboard service.
    pub clipboard: Rc<dyn ClipboardService>,
    /// Layout sampling for diagnostics.
    pub layout_probe: Rc<dyn LayoutProbe>,
    /// Diagnostics report destination.
    pub diagnostics: Rc<dyn DiagnosticsSink>,
}

/// Assembles the full browser host-service bundle.
pub fn host_services() -> WebHostServices {
    WebHostServices {
        scheduler: Rc::new(scheduler()),
        clipboard: Rc::new(clipboard_service()),
        layout_probe: Rc::new(layout_probe()),
        diagnostics: Rc::new(diagnostics_sink()),
    }
}
