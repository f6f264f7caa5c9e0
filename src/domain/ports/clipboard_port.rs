//! Clipboard source port definition.

/// Port for reading the system clipboard.
pub trait ClipboardPort: Send + Sync {
    /// Returns the clipboard's text payload, or `None` when the clipboard
    /// is empty, holds no text, or cannot be read.
    fn read_text(&self) -> Option<String>;

    /// Bitmap acquisition stub. The bitmap path was never completed in any
    /// shipped revision; implementations must return `None` rather than
    /// guess at a decoding.
    fn read_image(&self) -> Option<Vec<u8>> {
        None
    }
}
