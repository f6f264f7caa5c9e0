//! Host session port definition.
//!
//! The host client hands the plugin a table of capabilities at load time;
//! this trait is that table's surface, so the pipeline never sees a
//! concrete host type.

use std::path::Path;

use thiserror::Error;

use crate::domain::entities::ContentDigest;

/// Opaque error reported by the host for a capability call.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct HostError {
    message: String,
}

impl HostError {
    /// Wraps a host-reported failure message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Identifier the host assigns to a started file transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferId(pub u64);

/// Port for the host client's session capabilities.
pub trait HostSessionPort: Send + Sync {
    /// Returns the numeric id identifying our client on the server.
    ///
    /// # Errors
    /// Returns the host's error when no session is established.
    fn own_client_id(&self) -> Result<u64, HostError>;

    /// Uploads a local file into the server's root-channel file repository
    /// under the given name.
    ///
    /// # Errors
    /// Returns the host's error when the transfer cannot be started.
    fn upload_file(&self, path: &Path, file_name: &str) -> Result<TransferId, HostError>;

    /// Registers the digest as the client's avatar attribute; `None`
    /// clears the attribute.
    ///
    /// # Errors
    /// Returns the host's error when the attribute cannot be set.
    fn set_avatar_digest(&self, digest: Option<&ContentDigest>) -> Result<(), HostError>;

    /// Flushes pending self-attribute changes to the server.
    ///
    /// # Errors
    /// Returns the host's error when the flush is rejected.
    fn commit_self_updates(&self) -> Result<(), HostError>;
}
