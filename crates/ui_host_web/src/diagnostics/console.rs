use ui_host::{DiagnosticCheck, DiagnosticReport, DiagnosticsSink, Severity};

fn badge(report: &DiagnosticReport) -> &'static str {
    match report.severity {
        Severity::Pass => "✅",
        Severity::Warn => "⚠️",
        Severity::Error => "❌",
        Severity::Info => match report.check {
            DiagnosticCheck::Viewport => "📐",
            DiagnosticCheck::BreakpointChange => "📱",
            DiagnosticCheck::Performance => "⚡",
            DiagnosticCheck::Shortcuts => "📋",
            DiagnosticCheck::Overlay => "🔧",
            _ => "🔍",
        },
    }
}

/// Console lines for a report: the badged headline followed by indented details.
pub fn console_lines(report: &DiagnosticReport) -> Vec<String> {
    std::iter::once(format!("{} {}", badge(report), report.headline))
        .chain(report.details.iter().map(|line| format!("  {line}")))
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
/// Sink that prints reports with `console.log/warn/error` and findings with `console.table`.
pub struct ConsoleDiagnosticsSink;

impl DiagnosticsSink for ConsoleDiagnosticsSink {
    fn report(&self, report: DiagnosticReport) {
        #[cfg(target_arch = "wasm32")]
        {
            use serde::Serialize;
            use serde_wasm_bindgen::Serializer;
            use wasm_bindgen::JsValue;

            for line in console_lines(&report) {
                let line = JsValue::from_str(&line);
                match report.severity {
                    Severity::Error => web_sys::console::error_1(&line),
                    Severity::Warn => web_sys::console::warn_1(&line),
                    Severity::Info | Severity::Pass => web_sys::console::log_1(&line),
                }
            }
            if report.findings.is_empty() {
                return;
            }
            match report.findings.serialize(&Serializer::json_compatible()) {
                Ok(rows) => web_sys::console::table_1(&rows),
                Err(err) => web_sys::console::warn_1(&JsValue::from_str(&format!(
                    "diagnostic findings could not be tabulated: {err}"
                ))),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        for line in console_lines(&report) {
            eprintln!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn lines_carry_badge_and_indented_details() {
        let report = DiagnosticReport::new(
            DiagnosticCheck::Performance,
            Severity::Info,
            "Performance Metrics:",
        )
        .with_detail("Page Load Time: 812ms");

        assert_eq!(
            console_lines(&report),
            vec![
                "⚡ Performance Metrics:".to_string(),
                "  Page Load Time: 812ms".to_string()
            ]
        );
    }

    #[test]
    fn severity_badge_wins_over_check_badge() {
        let report = DiagnosticReport::new(
            DiagnosticCheck::Performance,
            Severity::Warn,
            "Page load time is slow (> 3s)",
        );
        assert_eq!(console_lines(&report)[0], "⚠️ Page load time is slow (> 3s)");
    }
}
