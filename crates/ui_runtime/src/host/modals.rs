use leptos::{ev, on_cleanup, window_event_listener};
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

use super::dom;
use crate::controller::UiController;

/// Wires `[data-modal-trigger]`, `[data-modal-close]`, overlay clicks and Escape.
pub(super) fn install(controller: &UiController) {
    for trigger in dom::query_all("[data-modal-trigger]") {
        let Some(modal_id) = trigger.get_attribute("data-modal-trigger") else {
            continue;
        };
        let ui = controller.clone();
        dom::listen(&trigger, "click", move |ev: MouseEvent| {
            ev.prevent_default();
            ui.open_modal(&modal_id);
        });
    }

    for close in dom::query_all("[data-modal-close]") {
        let ui = controller.clone();
        let button = close.clone();
        dom::listen(&close, "click", move |_: MouseEvent| {
            let Some(modal) = button.closest(".modal").ok().flatten() else {
                return;
            };
            ui.close_modal(&modal.id());
        });
    }

    for overlay in dom::query_all(".modal-overlay") {
        let ui = controller.clone();
        dom::listen(&overlay, "click", move |ev: MouseEvent| {
            if ev.target() != ev.current_target() {
                return;
            }
            close_for_overlay(&ui, ev.current_target().and_then(|t| t.dyn_into().ok()));
        });
    }

    let ui = controller.clone();
    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() != "Escape" {
            return;
        }
        ui.close_active_modal();
    });
    on_cleanup(move || escape_listener.remove());
}

/// Closes the modal fronted by `overlay` when it is open, otherwise the most recent modal.
fn close_for_overlay(ui: &UiController, overlay: Option<Element>) {
    let fronted = overlay
        .and_then(|overlay| overlay.next_element_sibling())
        .map(|modal| modal.id())
        .filter(|modal_id| ui.is_modal_open(modal_id));
    match fronted {
        Some(modal_id) => {
            ui.close_modal(&modal_id);
        }
        None => {
            ui.close_active_modal();
        }
    }
}
