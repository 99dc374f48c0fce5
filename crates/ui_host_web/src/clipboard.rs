//! Clipboard host-service adapter backed by the async Clipboard API.

use ui_host::{ClipboardFuture, ClipboardService};

#[cfg(target_arch = "wasm32")]
mod imp {
    use js_sys::Promise;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;

    use crate::interop::js_error_to_string;

    #[wasm_bindgen(inline_js = r#"
export function jsClipboardWriteText(text) {
  if (typeof navigator === 'undefined' || !navigator.clipboard || !navigator.clipboard.writeText) {
    return Promise.reject(new Error('Clipboard API is unavailable in this browser context'));
  }
  return navigator.clipboard.writeText(text);
}
"#)]
    extern "C" {
        #[wasm_bindgen(js_name = jsClipboardWriteText)]
        fn js_clipboard_write_text(text: &str) -> Promise;
    }

    pub async fn write_text(text: &str) -> Result<(), String> {
        JsFuture::from(js_clipboard_write_text(text))
            .await
            .map(|_| ())
            .map_err(js_error_to_string)
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Browser clipboard adapter using `navigator.clipboard.writeText`.
pub struct WebClipboardService;

impl ClipboardService for WebClipboardService {
    fn write_text<'a>(&'a self, text: &'a str) -> ClipboardFuture<'a, Result<(), String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                return imp::write_text(text).await;
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = text;
                Err("clipboard requires a browser context".to_string())
            }
        })
    }
}
