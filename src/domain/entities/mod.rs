//! Entity and value object definitions.

mod avatar_file;
mod clipboard_payload;
mod content_digest;

pub use avatar_file::{AvatarFile, ClientIdHash};
pub use clipboard_payload::{ClipboardPayload, PayloadKind};
pub use content_digest::ContentDigest;
