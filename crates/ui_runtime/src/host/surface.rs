use leptos::{RwSignal, SignalUpdate};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::dom;
use crate::{
    controller::UiSurface,
    model::{ToastId, ToastPhase, ToastRecord},
};

/// Descendants that can receive focus when a modal opens.
pub const FOCUSABLE_SELECTOR: &str =
    r#"button, [href], input, select, textarea, [tabindex]:not([tabindex="-1"])"#;

/// The modal element and the overlay immediately before it.
fn modal_pair(modal_id: &str) -> Option<(HtmlElement, HtmlElement)> {
    let modal = dom::document()?.get_element_by_id(modal_id)?;
    let overlay = modal.previous_element_sibling()?;
    Some((
        modal.dyn_into::<HtmlElement>().ok()?,
        overlay.dyn_into::<HtmlElement>().ok()?,
    ))
}

/// [`UiSurface`] over the live document. Toasts are mirrored into a signal rendered by
/// [`ToastStack`](crate::components::ToastStack).
pub struct DomSurface {
    toasts: RwSignal<Vec<ToastRecord>>,
}

impl DomSurface {
    pub fn new(toasts: RwSignal<Vec<ToastRecord>>) -> Self {
        Self { toasts }
    }
}

impl UiSurface for DomSurface {
    fn render_toast(&self, toast: &ToastRecord) {
        let toast = toast.clone();
        self.toasts.update(|list| list.push(toast));
    }

    fn fade_out_toast(&self, toast_id: ToastId) {
        self.toasts.update(|list| {
            if let Some(toast) = list.iter_mut().find(|toast| toast.id == toast_id) {
                toast.phase = ToastPhase::Leaving;
            }
        });
    }

    fn remove_toast(&self, toast_id: ToastId) {
        self.toasts
            .update(|list| list.retain(|toast| toast.id != toast_id));
    }

    fn modal_exists(&self, modal_id: &str) -> bool {
        modal_pair(modal_id).is_some()
    }

    fn set_modal_visible(&self, modal_id: &str, visible: bool) {
        let Some((modal, overlay)) = modal_pair(modal_id) else {
            return;
        };
        let (modal_display, overlay_display) = if visible {
            ("flex", "block")
        } else {
            ("none", "none")
        };
        let _ = modal.style().set_property("display", modal_display);
        let _ = overlay.style().set_property("display", overlay_display);
    }

    fn set_scroll_locked(&self, locked: bool) {
        let Some(body) = dom::body() else {
            return;
        };
        let style = body.style();
        let _ = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
    }

    fn focus_first_in(&self, modal_id: &str) {
        let Some((modal, _)) = modal_pair(modal_id) else {
            return;
        };
        let Some(target) = modal.query_selector(FOCUSABLE_SELECTOR).ok().flatten() else {
            return;
        };
        if let Ok(target) = target.dyn_into::<HtmlElement>() {
            let _ = target.focus();
        }
    }
}
