//! Clipboard access.
//!
//! Copying is best-effort: `copy_or_warn` logs a failed write and lets
//! the caller carry on.

pub mod timer;

pub use timer::DelayedReset;

use crate::errors::{Result, VaultError};

/// Something text can be copied into.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;

    fn clear(&mut self) -> Result<()>;
}

/// The platform clipboard, via `arboard`.
///
/// On X11 and Wayland the copied text is served by this process, so
/// keep the value alive for as long as the text should stay available.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let inner = arboard::Clipboard::new()
            .map_err(|e| VaultError::ClipboardWriteError(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.inner
            .set_text(text)
            .map_err(|e| VaultError::ClipboardWriteError(e.to_string()))
    }

    fn clear(&mut self) -> Result<()> {
        self.inner
            .clear()
            .map_err(|e| VaultError::ClipboardWriteError(e.to_string()))
    }
}

/// Copy `text` into `sink`. Returns `true` on success.
///
/// Failures are logged and otherwise ignored.
pub fn copy_or_warn<C: ClipboardSink + ?Sized>(sink: &mut C, text: &str) -> bool {
    match sink.set_text(text) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "failed to copy to clipboard");
            false
        }
    }
}

/// Open the system clipboard and clear it, logging any failure.
pub fn clear_system_clipboard() {
    let result = SystemClipboard::new().and_then(|mut c| c.clear());
    if let Err(e) = result {
        tracing::warn!(error = %e, "failed to clear clipboard");
    }
}
