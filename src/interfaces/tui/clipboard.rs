//! System clipboard access
//!
//! The arboard handle is created on first use and kept for the session: on
//! X11/Wayland the copied text is only served while the handle is alive.

use tracing::warn;

use crate::errors::{MinilinkerError, Result};

/// Destination for copied text.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new().map_err(|e| {
                warn!("Clipboard unavailable: {}", e);
                MinilinkerError::clipboard(e.to_string())
            })?;
            self.inner = Some(clipboard);
        }

        match self.inner.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text)
                .map_err(|e| MinilinkerError::clipboard(e.to_string())),
            None => Err(MinilinkerError::clipboard("Clipboard unavailable")),
        }
    }
}
