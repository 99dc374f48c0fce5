//! Functions exported to page scripts through `wasm-bindgen`.
//!
//! Every export is a no-op (returning `None`/`false`) until [`boot`](super::boot) has registered
//! the page runtime.

use leptos::logging;
use wasm_bindgen::prelude::*;

use crate::{
    clipboard,
    model::{ToastId, ToastKind, ToastRequest},
    runtime_context::page_runtime,
};

fn show(request: ToastRequest) -> Option<u32> {
    let runtime = page_runtime()?;
    let id = runtime.controller.show_toast(request)?;
    u32::try_from(id.0).ok()
}

fn show_titled(kind: ToastKind, message: String, title: Option<String>) -> Option<u32> {
    let request = ToastRequest::titled(kind, message);
    show(match title {
        Some(title) => request.with_title(title),
        None => request,
    })
}

#[wasm_bindgen(js_name = toast_success)]
pub fn toast_success(message: String, title: Option<String>) -> Option<u32> {
    show_titled(ToastKind::Success, message, title)
}

#[wasm_bindgen(js_name = toast_error)]
pub fn toast_error(message: String, title: Option<String>) -> Option<u32> {
    show_titled(ToastKind::Error, message, title)
}

#[wasm_bindgen(js_name = toast_warning)]
pub fn toast_warning(message: String, title: Option<String>) -> Option<u32> {
    show_titled(ToastKind::Warning, message, title)
}

#[wasm_bindgen(js_name = toast_info)]
pub fn toast_info(message: String, title: Option<String>) -> Option<u32> {
    show_titled(ToastKind::Info, message, title)
}

/// Shows a toast with every option. Unknown kinds render as `info`.
#[wasm_bindgen(js_name = toast_show)]
pub fn toast_show(
    kind: String,
    message: String,
    title: Option<String>,
    duration_ms: Option<u32>,
    icon: Option<String>,
) -> Option<u32> {
    let mut request = ToastRequest::new(ToastKind::parse_lossy(&kind), message);
    if let Some(title) = title {
        request = request.with_title(title);
    }
    if let Some(duration_ms) = duration_ms {
        request = request.with_duration_ms(u64::from(duration_ms));
    }
    if let Some(icon) = icon {
        request = request.with_icon(icon);
    }
    show(request)
}

#[wasm_bindgen(js_name = toast_dismiss)]
pub fn toast_dismiss(toast_id: u32) {
    if let Some(runtime) = page_runtime() {
        runtime
            .controller
            .dismiss_toast(ToastId(u64::from(toast_id)));
    }
}

#[wasm_bindgen(js_name = modal_open)]
pub fn modal_open(modal_id: String) -> bool {
    page_runtime().is_some_and(|runtime| runtime.controller.open_modal(&modal_id))
}

#[wasm_bindgen(js_name = modal_close)]
pub fn modal_close(modal_id: String) -> bool {
    page_runtime().is_some_and(|runtime| runtime.controller.close_modal(&modal_id))
}

/// Copies `text`, showing a toast with the outcome unless `show_toast` is `false`.
#[wasm_bindgen(js_name = copy_to_clipboard)]
pub async fn copy_text(text: String, show_toast: Option<bool>) -> bool {
    let Some(runtime) = page_runtime() else {
        return false;
    };
    let notify = show_toast.unwrap_or(true).then_some(&runtime.controller);
    match clipboard::copy_to_clipboard(runtime.clipboard.as_ref(), notify, &text).await {
        Ok(()) => true,
        Err(err) => {
            logging::error!("Failed to copy: {err}");
            false
        }
    }
}
