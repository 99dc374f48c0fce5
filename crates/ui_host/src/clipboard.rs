//! Clipboard service contracts and in-memory adapters.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`ClipboardService`].
pub type ClipboardFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for writing plain text to the system clipboard.
pub trait ClipboardService {
    /// Writes `text` to the clipboard.
    fn write_text<'a>(&'a self, text: &'a str) -> ClipboardFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Clipboard adapter for targets without clipboard access; every write fails.
pub struct UnavailableClipboardService;

impl ClipboardService for UnavailableClipboardService {
    fn write_text<'a>(&'a self, _text: &'a str) -> ClipboardFuture<'a, Result<(), String>> {
        Box::pin(async { Err("clipboard unavailable".to_string()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory clipboard that records the last written text, optionally failing every write.
pub struct MemoryClipboardService {
    contents: Rc<RefCell<Option<String>>>,
    failure: Option<String>,
}

impl MemoryClipboardService {
    /// Creates a clipboard whose writes always fail with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            contents: Rc::default(),
            failure: Some(message.into()),
        }
    }

    /// Returns the last successfully written text.
    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl ClipboardService for MemoryClipboardService {
    fn write_text<'a>(&'a self, text: &'a str) -> ClipboardFuture<'a, Result<(), String>> {
        Box::pin(async move {
            if let Some(message) = &self.failure {
                return Err(message.clone());
            }
            *self.contents.borrow_mut() = Some(text.to_string());
            Ok(())
        })
    }
}
