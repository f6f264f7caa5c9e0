//! clip-avatar - set your voice-chat avatar straight from the clipboard.
//!
//! Takes an image URL or an inline base64 data URI from the system
//! clipboard, normalizes it into an avatar candidate on local storage, and
//! hands it to the host client for upload and registration. The host is
//! reached only through narrow capability ports, so the pipeline never
//! depends on a concrete client.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing pipeline services and use cases.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external capabilities.
pub mod infrastructure;

/// Current version of the plugin.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Plugin name.
pub const NAME: &str = "clip-avatar";
