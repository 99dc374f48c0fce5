//! Layout sampling and report delivery contracts for responsive diagnostics.
//!
//! A [`LayoutProbe`] turns the live page into plain samples; checks in the runtime turn samples
//! into [`DiagnosticReport`] values and hand them to a [`DiagnosticsSink`]. Keeping both ends behind
//! traits lets the checks run against fixed samples in native tests.

use std::{cell::RefCell, rc::Rc};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
/// Inner window size in CSS pixels.
pub struct ViewportSize {
    /// Window inner width.
    pub width: u32,
    /// Window inner height.
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Default)]
/// Bounding box of an interactive element (`a, button, input, select`).
pub struct TouchTargetSample {
    /// Upper-case tag name.
    pub tag: String,
    /// Text content, untrimmed.
    pub text: String,
    /// Rendered width in CSS pixels.
    pub width: f64,
    /// Rendered height in CSS pixels.
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
/// Sizing-related style of an `img` element.
pub struct ImageSample {
    /// Resolved `src` URL.
    pub src: String,
    /// Computed `max-width` value.
    pub computed_max_width: String,
    /// Inline `style.height` value (empty when unset).
    pub inline_height: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
/// Horizontal extent of an arbitrary element.
pub struct ElementBoxSample {
    /// Upper-case tag name.
    pub tag: String,
    /// `className` value.
    pub class: String,
    /// Rendered width in CSS pixels.
    pub width: f64,
    /// Right edge relative to the viewport.
    pub right: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
/// Computed font size of a text-bearing element.
pub struct TextSample {
    /// Upper-case tag name.
    pub tag: String,
    /// Text content, untrimmed.
    pub text: String,
    /// Computed font size in CSS pixels.
    pub font_size_px: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
/// Navigation timing marks in milliseconds since the epoch.
pub struct LoadTiming {
    /// `navigationStart`.
    pub navigation_start: f64,
    /// `domContentLoadedEventEnd`.
    pub dom_content_loaded_event_end: f64,
    /// `loadEventEnd`.
    pub load_event_end: f64,
}

/// Read-only access to the current page layout.
pub trait LayoutProbe {
    /// Current viewport size.
    fn viewport(&self) -> ViewportSize;
    /// Scroll width of the document body.
    fn body_scroll_width(&self) -> f64;
    /// Interactive elements that should meet touch-target sizing.
    fn touch_targets(&self) -> Vec<TouchTargetSample>;
    /// All images on the page.
    fn images(&self) -> Vec<ImageSample>;
    /// Every element's horizontal extent, in document order.
    fn element_boxes(&self) -> Vec<ElementBoxSample>;
    /// Text-bearing elements with their computed font size.
    fn text_elements(&self) -> Vec<TextSample>;
    /// Navigation timing, when the host exposes it.
    fn load_timing(&self) -> Option<LoadTiming>;
}

#[derive(Debug, Clone, Default)]
/// Probe that returns fixed samples.
pub struct StaticLayoutProbe {
    /// Returned by [`LayoutProbe::viewport`].
    pub viewport: ViewportSize,
    /// Returned by [`LayoutProbe::body_scroll_width`].
    pub body_scroll_width: f64,
    /// Returned by [`LayoutProbe::touch_targets`].
    pub touch_targets: Vec<TouchTargetSample>,
    /// Returned by [`LayoutProbe::images`].
    pub images: Vec<ImageSample>,
    /// Returned by [`LayoutProbe::element_boxes`].
    pub element_boxes: Vec<ElementBoxSample>,
    /// Returned by [`LayoutProbe::text_elements`].
    pub text_elements: Vec<TextSample>,
    /// Returned by [`LayoutProbe::load_timing`].
    pub load_timing: Option<LoadTiming>,
}

impl LayoutProbe for StaticLayoutProbe {
    fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    fn body_scroll_width(&self) -> f64 {
        self.body_scroll_width
    }

    fn touch_targets(&self) -> Vec<TouchTargetSample> {
        self.touch_targets.clone()
    }

    fn images(&self) -> Vec<ImageSample> {
        self.images.clone()
    }

    fn element_boxes(&self) -> Vec<ElementBoxSample> {
        self.element_boxes.clone()
    }

    fn text_elements(&self) -> Vec<TextSample> {
        self.text_elements.clone()
    }

    fn load_timing(&self) -> Option<LoadTiming> {
        self.load_timing
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Diagnostic check that produced a report.
pub enum DiagnosticCheck {
    /// Tool gating and startup messages.
    Session,
    /// Viewport size and breakpoint.
    Viewport,
    /// Breakpoint transitions across resizes.
    BreakpointChange,
    /// Interactive element sizing.
    TouchTargets,
    /// Image sizing styles.
    Images,
    /// Page wider than the window.
    HorizontalScroll,
    /// Text below the readable size.
    FontSizes,
    /// Navigation timing.
    Performance,
    /// Keyboard shortcut legend.
    Shortcuts,
    /// Debug overlay class toggles.
    Overlay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Report severity, mapped onto console levels by browser sinks.
pub enum Severity {
    /// Informational output.
    Info,
    /// Check passed.
    Pass,
    /// Check found issues.
    Warn,
    /// Check found a layout defect.
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
/// One table row attached to a report.
pub enum Finding {
    /// Undersized interactive element.
    TouchTarget {
        /// Trimmed text (first 30 chars) or tag name.
        text: String,
        /// Rounded width.
        width: i64,
        /// Rounded height.
        height: i64,
        /// Tag name.
        tag: String,
    },
    /// Image sizing issue.
    Image {
        /// Last path segment of the image URL.
        src: String,
        /// Issue description.
        issue: String,
    },
    /// Element extending past the window's right edge.
    Overflow {
        /// Tag name.
        element: String,
        /// Class attribute.
        class: String,
        /// Rounded width.
        width: i64,
        /// Rounded right edge.
        right: i64,
    },
    /// Text below the minimum font size.
    SmallFont {
        /// Trimmed text (first 30 chars).
        text: String,
        /// Rounded font size.
        #[serde(rename = "fontSize")]
        font_size: i64,
        /// Tag name.
        tag: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Structured outcome of a diagnostic check.
pub struct DiagnosticReport {
    /// Check that produced the report.
    pub check: DiagnosticCheck,
    /// Overall severity.
    pub severity: Severity,
    /// One-line summary.
    pub headline: String,
    /// Additional lines printed under the headline.
    pub details: Vec<String>,
    /// Tabular findings.
    pub findings: Vec<Finding>,
}

impl DiagnosticReport {
    /// Creates a report with no details or findings.
    pub fn new(check: DiagnosticCheck, severity: Severity, headline: impl Into<String>) -> Self {
        Self {
            check,
            severity,
            headline: headline.into(),
            details: Vec::new(),
            findings: Vec::new(),
        }
    }

    /// Appends a detail line.
    pub fn with_detail(mut self, line: impl Into<String>) -> Self {
        self.details.push(line.into());
        self
    }

    /// Replaces the findings table.
    pub fn with_findings(mut self, findings: Vec<Finding>) -> Self {
        self.findings = findings;
        self
    }
}

/// Destination for diagnostic reports.
pub trait DiagnosticsSink {
    /// Delivers one report.
    fn report(&self, report: DiagnosticReport);
}

#[derive(Debug, Clone, Default)]
/// Sink that keeps every report for later assertions.
pub struct MemoryDiagnosticsSink {
    reports: Rc<RefCell<Vec<DiagnosticReport>>>,
}

impl MemoryDiagnosticsSink {
    /// Snapshot of all reports received so far.
    pub fn reports(&self) -> Vec<DiagnosticReport> {
        self.reports.borrow().clone()
    }

    /// Reports produced by one check.
    pub fn reports_for(&self, check: DiagnosticCheck) -> Vec<DiagnosticReport> {
        self.reports
            .borrow()
            .iter()
            .filter(|report| report.check == check)
            .cloned()
            .collect()
    }

    /// Drops all recorded reports.
    pub fn clear(&self) {
        self.reports.borrow_mut().clear();
    }
}

impl DiagnosticsSink for MemoryDiagnosticsSink {
    fn report(&self, report: DiagnosticReport) {
        self.reports.borrow_mut().push(report);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn findings_serialize_as_flat_table_rows() {
        let rows = vec![
            Finding::TouchTarget {
                text: "Book".to_string(),
                width: 40,
                height: 20,
                tag: "BUTTON".to_string(),
            },
            Finding::SmallFont {
                text: "fine print".to_string(),
                font_size: 11,
                tag: "SPAN".to_string(),
            },
        ];

        assert_eq!(
            serde_json::to_value(&rows).expect("serialize"),
            json!([
                { "text": "Book", "width": 40, "height": 20, "tag": "BUTTON" },
                { "text": "fine print", "fontSize": 11, "tag": "SPAN" }
            ])
        );
    }

    #[test]
    fn memory_sink_filters_by_check() {
        let sink = MemoryDiagnosticsSink::default();
        sink.report(DiagnosticReport::new(
            DiagnosticCheck::Images,
            Severity::Pass,
            "All images are responsive",
        ));
        sink.report(DiagnosticReport::new(
            DiagnosticCheck::Performance,
            Severity::Info,
            "Performance Metrics:",
        ));

        assert_eq!(sink.reports().len(), 2);
        assert_eq!(sink.reports_for(DiagnosticCheck::Images).len(), 1);

        sink.clear();
        assert!(sink.reports().is_empty());
    }
}
