use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ToastId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastKind {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "toast-success",
            Self::Error => "toast-error",
            Self::Warning => "toast-warning",
            Self::Info => "toast-info",
        }
    }

    /// Title used by the kind-specific convenience constructors.
    pub fn default_title(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Info => "Info",
        }
    }

    pub fn icon_svg(self) -> &'static str {
        match self {
            Self::Success => SUCCESS_ICON,
            Self::Error => ERROR_ICON,
            Self::Warning => WARNING_ICON,
            Self::Info => INFO_ICON,
        }
    }

    /// Parses `success|error|warning|info`, falling back to [`ToastKind::Info`].
    pub fn parse_lossy(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "error" => Self::Error,
            "warning" => Self::Warning,
            _ => Self::Info,
        }
    }
}

const SUCCESS_ICON: &str = r#"<svg class="toast-icon" fill="currentColor" viewBox="0 0 20 20"><path fill-rule="evenodd" d="M10 18a8 8 0 100-16 8 8 0 000 16zm3.707-9.293a1 1 0 00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z" clip-rule="evenodd"/></svg>"#;
const ERROR_ICON: &str = r#"<svg class="toast-icon" fill="currentColor" viewBox="0 0 20 20"><path fill-rule="evenodd" d="M10 18a8 8 0 100-16 8 8 0 000 16zM8.707 7.293a1 1 0 00-1.414 1.414L8.586 10l-1.293 1.293a1 1 0 101.414 1.414L10 11.414l1.293 1.293a1 1 0 001.414-1.414L11.414 10l1.293-1.293a1 1 0 00-1.414-1.414L10 8.586 8.707 7.293z" clip-rule="evenodd"/></svg>"#;
const WARNING_ICON: &str = r#"<svg class="toast-icon" fill="currentColor" viewBox="0 0 20 20"><path fill-rule="evenodd" d="M8.257 3.099c.765-1.36 2.722-1.36 3.486 0l5.58 9.92c.75 1.334-.213 2.98-1.742 2.98H4.42c-1.53 0-2.493-1.646-1.743-2.98l5.58-9.92zM11 13a1 1 0 11-2 0 1 1 0 012 0zm-1-8a1 1 0 00-1 1v3a1 1 0 002 0V6a1 1 0 00-1-1z" clip-rule="evenodd"/></svg>"#;
const INFO_ICON: &str = r#"<svg class="toast-icon" fill="currentColor" viewBox="0 0 20 20"><path fill-rule="evenodd" d="M18 10a8 8 0 11-16 0 8 8 0 0116 0zm-7-4a1 1 0 11-2 0 1 1 0 012 0zM9 9a1 1 0 000 2v3a1 1 0 001 1h1a1 1 0 100-2v-3a1 1 0 00-1-1H9z" clip-rule="evenodd"/></svg>"#;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Request accepted by the toast reducer.
pub struct ToastRequest {
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
    /// Auto-dismiss delay. `None` uses the configured default; `Some(0)` never auto-dismisses.
    pub duration_ms: Option<u64>,
    /// Custom icon markup replacing the kind's built-in icon.
    pub icon: Option<String>,
}

impl ToastRequest {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            ..Self::default()
        }
    }

    /// Request with the kind's default title, as used by `success`/`error`/`warning`/`info`.
    pub fn titled(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            title: kind.default_title().to_string(),
            ..Self::new(kind, message)
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToastPhase {
    Visible,
    /// Fade-out animation running; removal is scheduled.
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastRecord {
    pub id: ToastId,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
    pub duration_ms: u64,
    pub icon: Option<String>,
    pub phase: ToastPhase,
}

impl ToastRecord {
    /// Icon markup to render: the custom icon, or the kind's built-in SVG.
    pub fn icon_markup(&self) -> &str {
        self.icon.as_deref().unwrap_or_else(|| self.kind.icon_svg())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToastState {
    pub next_id: u64,
    /// Displayed toasts in creation order.
    pub toasts: Vec<ToastRecord>,
}

impl ToastState {
    pub fn find(&self, id: ToastId) -> Option<&ToastRecord> {
        self.toasts.iter().find(|toast| toast.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Modal open flags keyed by element id, plus the order in which open modals were opened.
pub struct ModalState {
    pub flags: BTreeMap<String, bool>,
    /// Open modal ids, most recently opened last.
    pub open_stack: Vec<String>,
}

impl ModalState {
    pub fn is_open(&self, modal_id: &str) -> bool {
        self.flags.get(modal_id).copied().unwrap_or(false)
    }

    /// The modal that ESC and overlay clicks act on.
    pub fn active(&self) -> Option<&str> {
        self.open_stack.last().map(String::as_str)
    }

    pub fn any_open(&self) -> bool {
        !self.open_stack.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UiState {
    pub toasts: ToastState,
    pub modals: ModalState,
}
