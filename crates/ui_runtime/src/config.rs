//! Page-level runtime configuration.
//!
//! Pages may embed `<script type="application/json" id="ui-config">` with a partial JSON object;
//! missing fields fall back to the defaults below.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// DOM id of the optional embedded configuration element.
pub const CONFIG_ELEMENT_ID: &str = "ui-config";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Runtime configuration for every page affordance.
pub struct UiConfig {
    /// Toast timing.
    pub toast: ToastConfig,
    /// Modal behavior.
    pub modal: ModalConfig,
    /// Scroll reveal observer tuning.
    pub reveal: RevealConfig,
    /// Particle field density.
    pub particles: ParticleConfig,
    /// Preloader fade timing.
    pub preloader: PreloaderConfig,
    /// Responsive diagnostics thresholds and gating.
    pub diagnostics: DiagnosticsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    /// Auto-dismiss delay used when a request does not set one.
    pub default_duration_ms: u64,
    /// Delay between the fade-out animation starting and DOM removal.
    pub fade_out_ms: u64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: 5000,
            fade_out_ms: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    /// Delay before focusing the first focusable descendant of an opened modal.
    pub focus_delay_ms: u64,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self { focus_delay_ms: 100 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Intersection ratio that triggers `[data-reveal]` elements.
    pub threshold: f64,
    /// Animation used when `data-reveal` is empty.
    pub default_animation: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            default_animation: "fadeInUp".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Viewports narrower than this use the mobile count.
    pub mobile_breakpoint_px: u32,
    pub mobile_count: usize,
    pub desktop_count: usize,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: 768,
            mobile_count: 30,
            desktop_count: 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreloaderConfig {
    /// Delay after window load before `#preloader` starts fading.
    pub fade_delay_ms: u64,
    /// Delay after the fade starts before `#preloader` is removed.
    pub remove_delay_ms: u64,
}

impl Default for PreloaderConfig {
    fn default() -> Self {
        Self {
            fade_delay_ms: 500,
            remove_delay_ms: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Hostnames where the debug tools are enabled.
    pub debug_hosts: Vec<String>,
    /// Query-string fragment that enables the debug tools on any host.
    pub debug_query_flag: String,
    /// Minimum touch target edge.
    pub min_touch_target_px: f64,
    /// Minimum readable font size.
    pub min_font_size_px: f64,
    /// Page loads slower than this are flagged.
    pub slow_load_ms: f64,
    /// Row cap for overflow and font tables.
    pub max_table_rows: usize,
    /// Delay after window load before the automatic checks run.
    pub auto_check_delay_ms: u64,
    /// Quiet period before a resize re-samples the viewport.
    pub viewport_debounce_ms: u64,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            debug_hosts: vec!["localhost".to_string(), "127.0.0.1".to_string()],
            debug_query_flag: "debug=true".to_string(),
            min_touch_target_px: 44.0,
            min_font_size_px: 14.0,
            slow_load_ms: 3000.0,
            max_table_rows: 10,
            auto_check_delay_ms: 1000,
            viewport_debounce_ms: 100,
        }
    }
}

#[derive(Debug, Error)]
/// Errors raised while reading embedded configuration.
pub enum ConfigError {
    /// The embedded JSON did not match [`UiConfig`].
    #[error("invalid ui config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl UiConfig {
    /// Parses a (possibly partial) JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is not valid JSON or has mistyped fields.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn partial_document_keeps_defaults_for_missing_fields() {
        let config = UiConfig::from_json(r#"{ "toast": { "default_duration_ms": 8000 } }"#)
            .expect("parse");

        assert_eq!(config.toast.default_duration_ms, 8000);
        assert_eq!(config.toast.fade_out_ms, 300);
        assert_eq!(config.modal, ModalConfig::default());
        assert_eq!(config.diagnostics.debug_query_flag, "debug=true");
    }

    #[test]
    fn blank_document_is_default() {
        assert_eq!(UiConfig::from_json("  \n").expect("parse"), UiConfig::default());
    }

    #[test]
    fn mistyped_field_is_rejected() {
        let err = UiConfig::from_json(r#"{ "particles": { "mobile_count": "many" } }"#)
            .expect_err("should fail");
        assert!(err.to_string().starts_with("invalid ui config"));
    }
}
