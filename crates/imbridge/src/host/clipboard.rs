//! System clipboard for the GUI, backed by arboard.

use imbridge_core::Clipboard;

/// The platform clipboard.
///
/// If the clipboard can not be opened (no display server, sandboxing) every
/// read returns `None` and writes are dropped.
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let inner = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                log::warn!("system clipboard unavailable: {e}");
                None
            }
        };
        Self { inner }
    }

    /// Whether the platform clipboard was opened.
    pub fn is_available(&self) -> bool {
        self.inner.is_some()
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn get_text(&mut self) -> Option<String> {
        let clipboard = self.inner.as_mut()?;
        match clipboard.get_text() {
            Ok(text) => Some(text),
            Err(e) => {
                log::debug!("clipboard read failed: {e}");
                None
            }
        }
    }

    fn set_text(&mut self, text: &str) {
        if let Some(clipboard) = self.inner.as_mut() {
            if let Err(e) = clipboard.set_text(text) {
                log::warn!("clipboard write failed: {e}");
            }
        }
    }
}
