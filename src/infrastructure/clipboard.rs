//! System clipboard adapter.

use arboard::Clipboard;
use tracing::{debug, error, warn};

use crate::domain::ports::ClipboardPort;

/// `arboard`-backed clipboard source.
///
/// A fresh handle is opened per read; anything may have touched the
/// clipboard between invocations.
#[derive(Clone, Default)]
pub struct SystemClipboard {}

impl SystemClipboard {
    /// Creates the adapter.
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl ClipboardPort for SystemClipboard {
    fn read_text(&self) -> Option<String> {
        match Clipboard::new() {
            Ok(mut cb) => match cb.get_text() {
                Ok(text) => Some(text),
                Err(e) => {
                    error!("Failed to get clipboard text: {}", e);
                    None
                }
            },
            Err(e) => {
                warn!("Failed to initialize clipboard for read: {}", e);
                None
            }
        }
    }

    // The bitmap path never worked in any shipped revision; acknowledge
    // the request and leave the clipboard alone.
    fn read_image(&self) -> Option<Vec<u8>> {
        debug!("Bitmap clipboard sources are not implemented");
        None
    }
}
