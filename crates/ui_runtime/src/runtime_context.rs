//! Runtime handles shared between the toast view, page installers and the JS exports.
//!
//! [`UiRuntimeContext`] is the `Copy` handle passed into Leptos components. [`PageRuntime`] is the
//! page-scoped service bundle registered once at boot so exported wasm functions can reach the
//! controller.

use std::{cell::RefCell, rc::Rc};

use leptos::*;
use ui_host::ClipboardService;

use crate::{
    controller::UiController,
    diagnostics::ResponsiveDiagnostics,
    model::{ToastId, ToastPhase, ToastRecord},
};

#[derive(Clone, Copy)]
/// Leptos-side handle for reading rendered toasts and dispatching toast actions.
pub struct UiRuntimeContext {
    /// Page controller.
    pub controller: StoredValue<UiController>,
    /// Toasts currently in the display list, mirrored by the DOM surface.
    pub toasts: RwSignal<Vec<ToastRecord>>,
}

impl UiRuntimeContext {
    pub fn new(controller: UiController, toasts: RwSignal<Vec<ToastRecord>>) -> Self {
        Self {
            controller: store_value(controller),
            toasts,
        }
    }

    /// Starts the fade-out of a toast (close button).
    pub fn dismiss(&self, toast_id: ToastId) {
        self.controller.get_value().dismiss_toast(toast_id);
    }

    /// Whether the toast's fade-out animation is running. Tracks `toasts` reactively.
    pub fn is_leaving(&self, toast_id: ToastId) -> bool {
        self.toasts.with(|list| {
            list.iter()
                .any(|toast| toast.id == toast_id && toast.phase == ToastPhase::Leaving)
        })
    }

    pub fn fade_out_ms(&self) -> u64 {
        self.controller
            .with_value(|controller| controller.config().toast.fade_out_ms)
    }
}

#[derive(Clone)]
/// Page-scoped services reachable from exported wasm functions.
pub struct PageRuntime {
    pub controller: UiController,
    pub clipboard: Rc<dyn ClipboardService>,
    /// Present only when the responsive debug tools are enabled for this page.
    pub diagnostics: Option<Rc<ResponsiveDiagnostics>>,
}

thread_local! {
    static PAGE_RUNTIME: RefCell<Option<PageRuntime>> = const { RefCell::new(None) };
}

/// Registers the page runtime, replacing any previous one.
pub fn register_page_runtime(runtime: PageRuntime) {
    PAGE_RUNTIME.with(|slot| *slot.borrow_mut() = Some(runtime));
}

/// Returns the registered page runtime, if boot has run.
pub fn page_runtime() -> Option<PageRuntime> {
    PAGE_RUNTIME.with(|slot| slot.borrow().clone())
}
