//! Loopback host session for running the pipeline without a live client.

use std::path::Path;

use tracing::info;

use crate::domain::entities::ContentDigest;
use crate::domain::ports::{HostError, HostSessionPort, TransferId};

/// Stand-in for a live server connection.
///
/// Implements the host capability surface by logging what a real host
/// would do with each call, so the CLI can exercise the full pipeline
/// from clipboard to normalized file to digest.
pub struct PreviewSession {
    client_id: u64,
}

impl PreviewSession {
    /// Creates a session that reports the given client id.
    #[must_use]
    pub const fn new(client_id: u64) -> Self {
        Self { client_id }
    }
}

impl HostSessionPort for PreviewSession {
    fn own_client_id(&self) -> Result<u64, HostError> {
        Ok(self.client_id)
    }

    fn upload_file(&self, path: &Path, file_name: &str) -> Result<TransferId, HostError> {
        info!(
            path = %path.display(),
            file_name,
            "Preview: would upload avatar to the root channel"
        );
        Ok(TransferId(0))
    }

    fn set_avatar_digest(&self, digest: Option<&ContentDigest>) -> Result<(), HostError> {
        match digest {
            Some(digest) => info!(%digest, "Preview: would register avatar digest"),
            None => info!("Preview: would clear avatar attribute"),
        }
        Ok(())
    }

    fn commit_self_updates(&self) -> Result<(), HostError> {
        info!("Preview: would flush self updates");
        Ok(())
    }
}
