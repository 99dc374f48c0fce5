//! Copy-to-clipboard helper that reports the outcome as a toast.

use ui_host::ClipboardService;

use crate::controller::UiController;

pub const COPY_SUCCESS_MESSAGE: &str = "Copied to clipboard!";
pub const COPY_FAILURE_MESSAGE: &str = "Failed to copy to clipboard";

/// Writes `text` to the clipboard and returns the host error on failure.
///
/// When `notify` is given, a success or error toast is shown on it.
///
/// # Errors
///
/// Returns the clipboard service's error message when the write fails.
pub async fn copy_to_clipboard(
    clipboard: &dyn ClipboardService,
    notify: Option<&UiController>,
    text: &str,
) -> Result<(), String> {
    let result = clipboard.write_text(text).await;
    if let Some(ui) = notify {
        match &result {
            Ok(()) => ui.success(COPY_SUCCESS_MESSAGE),
            Err(_) => ui.error(COPY_FAILURE_MESSAGE),
        };
    }
    result
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use ui_host::{ManualScheduler, MemoryClipboardService};

    use super::*;
    use crate::{config::UiConfig, controller::testing::RecordingSurface, model::ToastKind};

    fn controller() -> UiController {
        UiController::new(
            UiConfig::default(),
            Rc::new(ManualScheduler::new()),
            Rc::new(RecordingSurface::default()),
        )
    }

    #[test]
    fn successful_copy_shows_success_toast() {
        let ui = controller();
        let clipboard = MemoryClipboardService::default();

        block_on(copy_to_clipboard(&clipboard, Some(&ui), "BOOK-42")).expect("copy");

        assert_eq!(clipboard.contents().as_deref(), Some("BOOK-42"));
        let toasts = ui.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, ToastKind::Success);
        assert_eq!(toasts[0].message, COPY_SUCCESS_MESSAGE);
    }

    #[test]
    fn failed_copy_shows_error_toast_and_returns_error() {
        let ui = controller();
        let clipboard = MemoryClipboardService::failing("permission denied");

        let err = block_on(copy_to_clipboard(&clipboard, Some(&ui), "x")).expect_err("fails");

        assert_eq!(err, "permission denied");
        assert_eq!(ui.toasts()[0].kind, ToastKind::Error);
        assert_eq!(ui.toasts()[0].message, COPY_FAILURE_MESSAGE);
    }

    #[test]
    fn silent_copy_shows_nothing() {
        let ui = controller();
        let clipboard = MemoryClipboardService::default();

        block_on(copy_to_clipboard(&clipboard, None, "quiet")).expect("copy");

        assert!(ui.toasts().is_empty());
    }
}
