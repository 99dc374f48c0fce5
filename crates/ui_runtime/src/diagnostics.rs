//! Responsive-layout diagnostics for development builds.
//!
//! Checks read plain samples from a [`LayoutProbe`] and emit [`DiagnosticReport`] values to a
//! [`DiagnosticsSink`]. The browser wiring (gating, keyboard chords, body attributes) lives in
//! `host::debug`.

use std::{cell::RefCell, fmt, rc::Rc};

use ui_host::{
    DiagnosticCheck, DiagnosticReport, DiagnosticsSink, Finding, LayoutProbe, Severity,
    ViewportSize,
};

use crate::config::DiagnosticsConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    SmallMobile,
    Mobile,
    TabletSmall,
    Tablet,
    Desktop,
    DesktopLarge,
    DesktopXl,
}

impl Breakpoint {
    pub fn for_width(width: u32) -> Self {
        match width {
            0..=374 => Self::SmallMobile,
            375..=639 => Self::Mobile,
            640..=767 => Self::TabletSmall,
            768..=1023 => Self::Tablet,
            1024..=1279 => Self::Desktop,
            1280..=1535 => Self::DesktopLarge,
            _ => Self::DesktopXl,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::SmallMobile => "Small Mobile",
            Self::Mobile => "Mobile",
            Self::TabletSmall => "Tablet Small",
            Self::Tablet => "Tablet",
            Self::Desktop => "Desktop",
            Self::DesktopLarge => "Desktop Large",
            Self::DesktopXl => "Desktop XL",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
}

impl Orientation {
    pub fn label(self) -> &'static str {
        match self {
            Self::Landscape => "Landscape",
            Self::Portrait => "Portrait",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Viewport size classified for the body `data-*` attributes.
pub struct ViewportInfo {
    pub width: u32,
    pub height: u32,
    pub breakpoint: Breakpoint,
    pub orientation: Orientation,
}

impl ViewportInfo {
    pub fn classify(size: ViewportSize) -> Self {
        Self {
            width: size.width,
            height: size.height,
            breakpoint: Breakpoint::for_width(size.width),
            orientation: if size.width > size.height {
                Orientation::Landscape
            } else {
                Orientation::Portrait
            },
        }
    }

    /// `(attribute, value)` pairs mirrored onto `<body>`.
    pub fn body_attributes(&self) -> [(&'static str, String); 4] {
        [
            ("data-width", self.width.to_string()),
            ("data-height", self.height.to_string()),
            ("data-breakpoint", self.breakpoint.label().to_string()),
            ("data-orientation", self.orientation.label().to_string()),
        ]
    }
}

/// Whether the debug tools should load for this page location.
pub fn debug_enabled(hostname: &str, search: &str, config: &DiagnosticsConfig) -> bool {
    config.debug_hosts.iter().any(|host| host == hostname)
        || (!config.debug_query_flag.is_empty() && search.contains(&config.debug_query_flag))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Commands reachable from `Ctrl+Shift+<letter>` and the `responsiveDebug` global.
pub enum DebugCommand {
    ToggleDebugGrid,
    ToggleViewportSize,
    CheckTouchTargets,
    CheckImages,
    CheckHorizontalScroll,
    CheckFontSizes,
    CheckPerformance,
    RunAllChecks,
}

impl DebugCommand {
    pub const ALL: [Self; 8] = [
        Self::ToggleDebugGrid,
        Self::ToggleViewportSize,
        Self::CheckTouchTargets,
        Self::CheckImages,
        Self::CheckHorizontalScroll,
        Self::CheckFontSizes,
        Self::CheckPerformance,
        Self::RunAllChecks,
    ];

    /// Resolves a key chord. Only `Ctrl+Shift+<upper-case letter>` maps to a command.
    pub fn from_chord(ctrl: bool, shift: bool, key: &str) -> Option<Self> {
        if !(ctrl && shift) {
            return None;
        }
        Self::ALL.into_iter().find(|command| command.key() == key)
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::ToggleDebugGrid => "D",
            Self::ToggleViewportSize => "V",
            Self::CheckTouchTargets => "T",
            Self::CheckImages => "I",
            Self::CheckHorizontalScroll => "S",
            Self::CheckFontSizes => "F",
            Self::CheckPerformance => "P",
            Self::RunAllChecks => "A",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::ToggleDebugGrid => "Toggle debug grid",
            Self::ToggleViewportSize => "Toggle viewport size",
            Self::CheckTouchTargets => "Check touch targets",
            Self::CheckImages => "Check images",
            Self::CheckHorizontalScroll => "Check horizontal scroll",
            Self::CheckFontSizes => "Check font sizes",
            Self::CheckPerformance => "Check performance",
            Self::RunAllChecks => "Run all checks",
        }
    }

    /// Body class toggled by overlay commands.
    pub fn body_class(self) -> Option<&'static str> {
        match self {
            Self::ToggleDebugGrid => Some("show-debug-grid"),
            Self::ToggleViewportSize => Some("show-viewport-size"),
            _ => None,
        }
    }

    /// Confirmation logged after an overlay toggle.
    pub fn toggle_report(self) -> Option<DiagnosticReport> {
        let headline = match self {
            Self::ToggleDebugGrid => "Debug grid toggled",
            Self::ToggleViewportSize => "Viewport size display toggled",
            _ => return None,
        };
        Some(DiagnosticReport::new(
            DiagnosticCheck::Overlay,
            Severity::Info,
            headline,
        ))
    }
}

/// Remembers the last reported breakpoint and reports transitions.
#[derive(Debug, Default)]
pub struct BreakpointTracker {
    last: Option<Breakpoint>,
}

impl BreakpointTracker {
    pub fn observe(&mut self, current: Breakpoint) -> Option<DiagnosticReport> {
        if self.last == Some(current) {
            return None;
        }
        let previous = self.last.map(Breakpoint::label).unwrap_or("Initial");
        self.last = Some(current);
        Some(DiagnosticReport::new(
            DiagnosticCheck::BreakpointChange,
            Severity::Info,
            format!("Breakpoint changed: {previous} → {current}"),
        ))
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

fn last_path_segment(src: &str) -> String {
    src.rsplit('/').next().unwrap_or(src).to_string()
}

/// Runs the responsive checks against a probe and forwards reports to a sink.
pub struct ResponsiveDiagnostics {
    config: DiagnosticsConfig,
    probe: Rc<dyn LayoutProbe>,
    sink: Rc<dyn DiagnosticsSink>,
    breakpoints: RefCell<BreakpointTracker>,
}

impl ResponsiveDiagnostics {
    pub fn new(
        config: DiagnosticsConfig,
        probe: Rc<dyn LayoutProbe>,
        sink: Rc<dyn DiagnosticsSink>,
    ) -> Self {
        Self {
            config,
            probe,
            sink,
            breakpoints: RefCell::new(BreakpointTracker::default()),
        }
    }

    pub fn config(&self) -> &DiagnosticsConfig {
        &self.config
    }

    pub fn emit(&self, report: DiagnosticReport) {
        self.sink.report(report);
    }

    /// Reports the viewport and any breakpoint transition; returns the classification.
    pub fn track_viewport(&self) -> ViewportInfo {
        let info = ViewportInfo::classify(self.probe.viewport());
        self.emit(DiagnosticReport::new(
            DiagnosticCheck::Viewport,
            Severity::Info,
            format!(
                "Viewport: {}x{} | {} | {}",
                info.width,
                info.height,
                info.breakpoint,
                info.orientation.label()
            ),
        ));
        if let Some(change) = self.breakpoints.borrow_mut().observe(info.breakpoint) {
            self.emit(change);
        }
        info
    }

    pub fn check_touch_targets(&self) {
        let min = self.config.min_touch_target_px;
        let findings: Vec<Finding> = self
            .probe
            .touch_targets()
            .into_iter()
            .filter(|target| target.width < min || target.height < min)
            .map(|target| {
                let text = truncate_chars(target.text.trim(), 30);
                Finding::TouchTarget {
                    text: if text.is_empty() {
                        target.tag.clone()
                    } else {
                        text
                    },
                    width: target.width.round() as i64,
                    height: target.height.round() as i64,
                    tag: target.tag,
                }
            })
            .collect();

        let report = if findings.is_empty() {
            DiagnosticReport::new(
                DiagnosticCheck::TouchTargets,
                Severity::Pass,
                "All touch targets meet minimum size requirements",
            )
        } else {
            DiagnosticReport::new(
                DiagnosticCheck::TouchTargets,
                Severity::Warn,
                format!(
                    "Found {} touch targets smaller than {min}px:",
                    findings.len()
                ),
            )
            .with_findings(findings)
        };
        self.emit(report);
    }

    pub fn check_images(&self) {
        let mut findings = Vec::new();
        for image in self.probe.images() {
            let src = last_path_segment(&image.src);
            if image.computed_max_width.trim() != "100%" {
                findings.push(Finding::Image {
                    src: src.clone(),
                    issue: "Missing max-width: 100%".to_string(),
                });
            }
            let height = image.inline_height.trim();
            if !height.is_empty() && height != "auto" {
                findings.push(Finding::Image {
                    src,
                    issue: "Has fixed height (should be auto)".to_string(),
                });
            }
        }

        let report = if findings.is_empty() {
            DiagnosticReport::new(
                DiagnosticCheck::Images,
                Severity::Pass,
                "All images are responsive",
            )
        } else {
            DiagnosticReport::new(
                DiagnosticCheck::Images,
                Severity::Warn,
                format!("Found {} image responsiveness issues:", findings.len()),
            )
            .with_findings(findings)
        };
        self.emit(report);
    }

    pub fn check_horizontal_scroll(&self) {
        let body_width = self.probe.body_scroll_width();
        let window_width = f64::from(self.probe.viewport().width);
        if body_width <= window_width {
            self.emit(DiagnosticReport::new(
                DiagnosticCheck::HorizontalScroll,
                Severity::Pass,
                "No horizontal scroll detected",
            ));
            return;
        }

        let findings: Vec<Finding> = self
            .probe
            .element_boxes()
            .into_iter()
            .filter(|element| element.right > window_width)
            .take(self.config.max_table_rows)
            .map(|element| Finding::Overflow {
                element: element.tag,
                class: element.class,
                width: element.width.round() as i64,
                right: element.right.round() as i64,
            })
            .collect();
        let mut report = DiagnosticReport::new(
            DiagnosticCheck::HorizontalScroll,
            Severity::Error,
            format!(
                "Horizontal scroll detected! Body width ({body_width}px) > Window width ({window_width}px)"
            ),
        );
        if !findings.is_empty() {
            report = report
                .with_detail("Elements causing overflow:")
                .with_findings(findings);
        }
        self.emit(report);
    }

    pub fn check_font_sizes(&self) {
        let min = self.config.min_font_size_px;
        let too_small: Vec<Finding> = self
            .probe
            .text_elements()
            .into_iter()
            .filter(|element| element.font_size_px < min && !element.text.trim().is_empty())
            .map(|element| Finding::SmallFont {
                text: truncate_chars(element.text.trim(), 30),
                font_size: element.font_size_px.round() as i64,
                tag: element.tag,
            })
            .collect();

        let report = if too_small.is_empty() {
            DiagnosticReport::new(
                DiagnosticCheck::FontSizes,
                Severity::Pass,
                "All text meets minimum font size",
            )
        } else {
            let count = too_small.len();
            DiagnosticReport::new(
                DiagnosticCheck::FontSizes,
                Severity::Warn,
                format!("Found {count} elements with font size < {min}px:"),
            )
            .with_findings(
                too_small
                    .into_iter()
                    .take(self.config.max_table_rows)
                    .collect(),
            )
        };
        self.emit(report);
    }

    pub fn check_performance(&self) {
        let Some(timing) = self.probe.load_timing() else {
            return;
        };
        let page_load = timing.load_event_end - timing.navigation_start;
        let dom_ready = timing.dom_content_loaded_event_end - timing.navigation_start;
        self.emit(
            DiagnosticReport::new(
                DiagnosticCheck::Performance,
                Severity::Info,
                "Performance Metrics:",
            )
            .with_detail(format!("Page Load Time: {page_load}ms"))
            .with_detail(format!("DOM Ready Time: {dom_ready}ms")),
        );
        if page_load > self.config.slow_load_ms {
            self.emit(DiagnosticReport::new(
                DiagnosticCheck::Performance,
                Severity::Warn,
                format!(
                    "Page load time is slow (> {}s)",
                    self.config.slow_load_ms / 1000.0
                ),
            ));
        } else {
            self.emit(DiagnosticReport::new(
                DiagnosticCheck::Performance,
                Severity::Pass,
                "Page load time is good",
            ));
        }
    }

    pub fn run_all_checks(&self) {
        self.emit(DiagnosticReport::new(
            DiagnosticCheck::Session,
            Severity::Info,
            "Running all responsive checks...",
        ));
        self.check_touch_targets();
        self.check_images();
        self.check_horizontal_scroll();
        self.check_font_sizes();
        self.check_performance();
    }

    /// Checks run automatically shortly after page load, followed by the shortcut legend.
    pub fn run_startup_checks(&self) {
        self.emit(DiagnosticReport::new(
            DiagnosticCheck::Session,
            Severity::Info,
            "Running automatic responsive checks...",
        ));
        self.check_horizontal_scroll();
        self.check_performance();
        self.emit(shortcut_legend());
    }

    /// Runs a check command. Overlay toggles are handled by the caller.
    pub fn run_command(&self, command: DebugCommand) {
        match command {
            DebugCommand::CheckTouchTargets => self.check_touch_targets(),
            DebugCommand::CheckImages => self.check_images(),
            DebugCommand::CheckHorizontalScroll => self.check_horizontal_scroll(),
            DebugCommand::CheckFontSizes => self.check_font_sizes(),
            DebugCommand::CheckPerformance => self.check_performance(),
            DebugCommand::RunAllChecks => self.run_all_checks(),
            DebugCommand::ToggleDebugGrid | DebugCommand::ToggleViewportSize => {}
        }
    }
}

pub fn shortcut_legend() -> DiagnosticReport {
    DebugCommand::ALL.into_iter().fold(
        DiagnosticReport::new(DiagnosticCheck::Shortcuts, Severity::Info, "Keyboard Shortcuts:"),
        |report, command| {
            report.with_detail(format!(
                "Ctrl+Shift+{} - {}",
                command.key(),
                command.description()
            ))
        },
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ui_host::{
        ElementBoxSample, ImageSample, LoadTiming, MemoryDiagnosticsSink, StaticLayoutProbe,
        TextSample, TouchTargetSample,
    };

    use super::*;

    fn diagnostics(probe: StaticLayoutProbe) -> (ResponsiveDiagnostics, MemoryDiagnosticsSink) {
        let sink = MemoryDiagnosticsSink::default();
        let diagnostics = ResponsiveDiagnostics::new(
            DiagnosticsConfig::default(),
            Rc::new(probe),
            Rc::new(sink.clone()),
        );
        (diagnostics, sink)
    }

    fn viewport(width: u32, height: u32) -> ViewportSize {
        ViewportSize { width, height }
    }

    #[test]
    fn breakpoints_follow_width_thresholds() {
        assert_eq!(Breakpoint::for_width(320), Breakpoint::SmallMobile);
        assert_eq!(Breakpoint::for_width(375), Breakpoint::Mobile);
        assert_eq!(Breakpoint::for_width(640), Breakpoint::TabletSmall);
        assert_eq!(Breakpoint::for_width(768), Breakpoint::Tablet);
        assert_eq!(Breakpoint::for_width(1024), Breakpoint::Desktop);
        assert_eq!(Breakpoint::for_width(1280), Breakpoint::DesktopLarge);
        assert_eq!(Breakpoint::for_width(1536), Breakpoint::DesktopXl);
    }

    #[test]
    fn square_viewport_is_portrait() {
        let info = ViewportInfo::classify(viewport(800, 800));
        assert_eq!(info.orientation, Orientation::Portrait);
        assert_eq!(info.body_attributes()[2], ("data-breakpoint", "Tablet".to_string()));
    }

    #[test]
    fn gate_accepts_local_hosts_and_query_flag_only() {
        let config = DiagnosticsConfig::default();
        assert!(debug_enabled("localhost", "", &config));
        assert!(debug_enabled("127.0.0.1", "", &config));
        assert!(debug_enabled("arena.example.com", "?debug=true&x=1", &config));
        assert!(!debug_enabled("arena.example.com", "?debug=false", &config));
    }

    #[test]
    fn chords_require_ctrl_and_shift() {
        assert_eq!(
            DebugCommand::from_chord(true, true, "A"),
            Some(DebugCommand::RunAllChecks)
        );
        assert_eq!(DebugCommand::from_chord(true, false, "A"), None);
        assert_eq!(DebugCommand::from_chord(true, true, "Z"), None);
        assert_eq!(
            DebugCommand::ToggleDebugGrid.body_class(),
            Some("show-debug-grid")
        );
        assert_eq!(DebugCommand::CheckImages.toggle_report(), None);
    }

    #[test]
    fn breakpoint_changes_are_reported_once_per_transition() {
        let mut tracker = BreakpointTracker::default();
        let first = tracker.observe(Breakpoint::Mobile).expect("initial");
        assert_eq!(first.headline, "Breakpoint changed: Initial → Mobile");
        assert_eq!(tracker.observe(Breakpoint::Mobile), None);
        let next = tracker.observe(Breakpoint::Tablet).expect("change");
        assert_eq!(next.headline, "Breakpoint changed: Mobile → Tablet");
    }

    #[test]
    fn undersized_touch_targets_are_listed() {
        let (diagnostics, sink) = diagnostics(StaticLayoutProbe {
            touch_targets: vec![
                TouchTargetSample {
                    tag: "BUTTON".to_string(),
                    text: "  Book now  ".to_string(),
                    width: 80.4,
                    height: 32.6,
                },
                TouchTargetSample {
                    tag: "A".to_string(),
                    text: "   ".to_string(),
                    width: 20.0,
                    height: 20.0,
                },
                TouchTargetSample {
                    tag: "INPUT".to_string(),
                    text: String::new(),
                    width: 200.0,
                    height: 48.0,
                },
            ],
            ..StaticLayoutProbe::default()
        });

        diagnostics.check_touch_targets();

        let report = &sink.reports()[0];
        assert_eq!(report.severity, Severity::Warn);
        assert_eq!(report.headline, "Found 2 touch targets smaller than 44px:");
        assert_eq!(
            report.findings,
            vec![
                Finding::TouchTarget {
                    text: "Book now".to_string(),
                    width: 80,
                    height: 33,
                    tag: "BUTTON".to_string(),
                },
                Finding::TouchTarget {
                    text: "A".to_string(),
                    width: 20,
                    height: 20,
                    tag: "A".to_string(),
                },
            ]
        );
    }

    #[test]
    fn image_issues_name_the_file() {
        let (diagnostics, sink) = diagnostics(StaticLayoutProbe {
            images: vec![
                ImageSample {
                    src: "https://cdn.example.com/img/hero.png".to_string(),
                    computed_max_width: "none".to_string(),
                    inline_height: "300px".to_string(),
                },
                ImageSample {
                    src: "/static/logo.svg".to_string(),
                    computed_max_width: "100%".to_string(),
                    inline_height: "auto".to_string(),
                },
            ],
            ..StaticLayoutProbe::default()
        });

        diagnostics.check_images();

        let report = &sink.reports()[0];
        assert_eq!(report.headline, "Found 2 image responsiveness issues:");
        assert_eq!(
            report.findings[1],
            Finding::Image {
                src: "hero.png".to_string(),
                issue: "Has fixed height (should be auto)".to_string(),
            }
        );
    }

    #[test]
    fn horizontal_overflow_lists_at_most_ten_offenders() {
        let boxes = (0..15)
            .map(|index| ElementBoxSample {
                tag: "DIV".to_string(),
                class: format!("row-{index}"),
                width: 500.0,
                right: 420.0,
            })
            .collect();
        let (diagnostics, sink) = diagnostics(StaticLayoutProbe {
            viewport: viewport(375, 812),
            body_scroll_width: 420.0,
            element_boxes: boxes,
            ..StaticLayoutProbe::default()
        });

        diagnostics.check_horizontal_scroll();

        let report = &sink.reports()[0];
        assert_eq!(report.severity, Severity::Error);
        assert_eq!(report.findings.len(), 10);
    }

    #[test]
    fn no_overflow_passes() {
        let (diagnostics, sink) = diagnostics(StaticLayoutProbe {
            viewport: viewport(1280, 800),
            body_scroll_width: 1280.0,
            ..StaticLayoutProbe::default()
        });

        diagnostics.check_horizontal_scroll();

        assert_eq!(sink.reports()[0].headline, "No horizontal scroll detected");
    }

    #[test]
    fn small_fonts_skip_empty_text() {
        let (diagnostics, sink) = diagnostics(StaticLayoutProbe {
            text_elements: vec![
                TextSample {
                    tag: "SPAN".to_string(),
                    text: "Terms apply".to_string(),
                    font_size_px: 11.5,
                },
                TextSample {
                    tag: "TD".to_string(),
                    text: "  ".to_string(),
                    font_size_px: 8.0,
                },
                TextSample {
                    tag: "P".to_string(),
                    text: "Body copy".to_string(),
                    font_size_px: 16.0,
                },
            ],
            ..StaticLayoutProbe::default()
        });

        diagnostics.check_font_sizes();

        let report = &sink.reports()[0];
        assert_eq!(report.headline, "Found 1 elements with font size < 14px:");
        assert_eq!(
            report.findings,
            vec![Finding::SmallFont {
                text: "Terms apply".to_string(),
                font_size: 12,
                tag: "SPAN".to_string(),
            }]
        );
    }

    #[test]
    fn slow_page_load_is_flagged() {
        let (diagnostics, sink) = diagnostics(StaticLayoutProbe {
            load_timing: Some(LoadTiming {
                navigation_start: 1_000.0,
                dom_content_loaded_event_end: 2_200.0,
                load_event_end: 4_500.0,
            }),
            ..StaticLayoutProbe::default()
        });

        diagnostics.check_performance();

        let reports = sink.reports_for(DiagnosticCheck::Performance);
        assert_eq!(
            reports[0].details,
            vec![
                "Page Load Time: 3500ms".to_string(),
                "DOM Ready Time: 1200ms".to_string()
            ]
        );
        assert_eq!(reports[1].severity, Severity::Warn);
        assert_eq!(reports[1].headline, "Page load time is slow (> 3s)");
    }

    #[test]
    fn run_all_checks_covers_every_check() {
        let (diagnostics, sink) = diagnostics(StaticLayoutProbe {
            viewport: viewport(1024, 768),
            body_scroll_width: 1000.0,
            load_timing: Some(LoadTiming::default()),
            ..StaticLayoutProbe::default()
        });

        diagnostics.run_all_checks();

        for check in [
            DiagnosticCheck::TouchTargets,
            DiagnosticCheck::Images,
            DiagnosticCheck::HorizontalScroll,
            DiagnosticCheck::FontSizes,
            DiagnosticCheck::Performance,
        ] {
            assert!(
                !sink.reports_for(check).is_empty(),
                "missing report for {check:?}"
            );
        }
    }

    #[test]
    fn startup_checks_end_with_the_shortcut_legend() {
        let (diagnostics, sink) = diagnostics(StaticLayoutProbe::default());

        diagnostics.run_startup_checks();

        let last = sink.reports().pop().expect("legend");
        assert_eq!(last.check, DiagnosticCheck::Shortcuts);
        assert_eq!(last.details.len(), 8);
        assert_eq!(last.details[0], "Ctrl+Shift+D - Toggle debug grid");
    }

    #[test]
    fn viewport_tracking_reports_size_and_initial_breakpoint() {
        let (diagnostics, sink) = diagnostics(StaticLayoutProbe {
            viewport: viewport(390, 844),
            ..StaticLayoutProbe::default()
        });

        let info = diagnostics.track_viewport();
        diagnostics.track_viewport();

        assert_eq!(info.breakpoint, Breakpoint::Mobile);
        assert_eq!(
            sink.reports()[0].headline,
            "Viewport: 390x844 | Mobile | Portrait"
        );
        assert_eq!(
            sink.reports_for(DiagnosticCheck::BreakpointChange).len(),
            1
        );
    }
}
