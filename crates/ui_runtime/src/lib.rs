pub mod clipboard;
pub mod components;
pub mod config;
pub mod controller;
pub mod decor;
pub mod diagnostics;
pub mod host;
pub mod model;
pub mod reducer;
pub mod reveal;
pub mod runtime_context;
pub mod timing;
pub mod validation;

pub use clipboard::copy_to_clipboard;
pub use components::ToastStack;
pub use config::{ConfigError, UiConfig};
pub use controller::{SubscriptionId, UiController, UiEvent, UiSurface};
pub use diagnostics::{debug_enabled, Breakpoint, DebugCommand, ResponsiveDiagnostics};
pub use model::*;
pub use reducer::{reduce_ui, ReducerError, UiAction, UiEffect};
pub use runtime_context::{page_runtime, PageRuntime, UiRuntimeContext};
pub use timing::{debounce, throttle, Debounced, Throttled};
pub use validation::{validate_field, validate_form, FieldError, FieldKind, FieldSpec, FormErrors};
