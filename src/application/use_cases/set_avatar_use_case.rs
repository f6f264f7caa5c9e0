//! Avatar pipeline orchestration.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing::{debug, error, info, warn};

use crate::application::services::{ContentResolver, ImageNormalizer, SizeGuard, content_hasher};
use crate::application::use_cases::ClearAvatarUseCase;
use crate::domain::entities::{AvatarFile, ClientIdHash, ClipboardPayload, ContentDigest};
use crate::domain::errors::AvatarError;
use crate::domain::ports::{ClipboardPort, HostSessionPort};

/// How a successful invocation concluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetAvatarOutcome {
    /// The avatar was uploaded, registered, and committed.
    Uploaded(ContentDigest),
    /// The normalized content matched the previous upload; nothing was
    /// sent to the host.
    DuplicateSkipped(ContentDigest),
}

impl SetAvatarOutcome {
    /// The digest of the normalized avatar content.
    #[must_use]
    pub const fn digest(&self) -> &ContentDigest {
        match self {
            Self::Uploaded(digest) | Self::DuplicateSkipped(digest) => digest,
        }
    }
}

/// Drives a single clipboard-to-avatar invocation end to end.
///
/// One synchronous, blocking run per user trigger: resolve the clipboard
/// source onto disk, normalize, enforce the size ceiling, hash, suppress
/// duplicates, then upload / register / commit through the host session.
/// Any fatal failure once acquisition has begun rolls the host's avatar
/// state back via [`ClearAvatarUseCase`].
pub struct SetAvatarUseCase {
    session: Arc<dyn HostSessionPort>,
    clipboard: Arc<dyn ClipboardPort>,
    resolver: ContentResolver,
    normalizer: ImageNormalizer,
    size_guard: SizeGuard,
    data_dir: PathBuf,
    // Digest of the most recent successful upload. A single hotkey press
    // reaches the plugin twice on some hosts; comparing here suppresses
    // the second upload. Never cleared on failure.
    last_uploaded: Mutex<Option<ContentDigest>>,
}

impl SetAvatarUseCase {
    /// Creates the use case; `data_dir` must already exist.
    #[must_use]
    pub fn new(
        session: Arc<dyn HostSessionPort>,
        clipboard: Arc<dyn ClipboardPort>,
        resolver: ContentResolver,
        normalizer: ImageNormalizer,
        size_guard: SizeGuard,
        data_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            session,
            clipboard,
            resolver,
            normalizer,
            size_guard,
            data_dir: data_dir.into(),
            last_uploaded: Mutex::new(None),
        }
    }

    /// Runs the pipeline once.
    ///
    /// # Errors
    /// Any stage failure aborts the invocation; see [`AvatarError`] for
    /// the taxonomy. Failures with [`AvatarError::requires_rollback`]
    /// trigger the compensating deletion before the error is returned.
    pub fn execute(&self) -> Result<SetAvatarOutcome, AvatarError> {
        debug!("Avatar pipeline invoked");

        let client_id = self.session.own_client_id().map_err(|e| {
            error!(error = %e, "Error querying own client id");
            AvatarError::client_id_unavailable(e.to_string())
        })?;

        let hash = ClientIdHash::from_client_id(client_id);
        let avatar = AvatarFile::locate(&self.data_dir, &hash);

        let payload = self
            .clipboard
            .read_text()
            .and_then(ClipboardPayload::new)
            .ok_or_else(|| {
                error!("Failed to get image source from clipboard");
                AvatarError::ClipboardEmpty
            })?;

        match self.run_pipeline(&payload, &avatar) {
            Ok(outcome) => Ok(outcome),
            Err(err) if err.requires_rollback() => {
                warn!(error = %err, "Pipeline failed, rolling back avatar state");
                // Best-effort compensation; its own failures are logged
                // inside the use case and must not mask the original error.
                let _ = ClearAvatarUseCase::new(self.session.clone()).execute();
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    fn run_pipeline(
        &self,
        payload: &ClipboardPayload,
        avatar: &AvatarFile,
    ) -> Result<SetAvatarOutcome, AvatarError> {
        self.resolver.resolve(payload, avatar.path())?;
        self.normalizer.normalize(avatar.path())?;
        self.size_guard.check(avatar.path())?;

        let digest = content_hasher::digest_file(avatar.path())?;

        if self.matches_last_upload(&digest) {
            info!(%digest, "Skipping duplicate avatar");
            return Ok(SetAvatarOutcome::DuplicateSkipped(digest));
        }

        let transfer = self
            .session
            .upload_file(avatar.path(), avatar.file_name())
            .map_err(|e| {
                error!(error = %e, "Failed to upload avatar file");
                AvatarError::upload(e.to_string())
            })?;
        debug!(
            transfer_id = transfer.0,
            file = avatar.file_name(),
            "Uploaded avatar file"
        );

        self.session.set_avatar_digest(Some(&digest)).map_err(|e| {
            error!(error = %e, "Failed to register avatar digest");
            AvatarError::registration(e.to_string())
        })?;

        self.session.commit_self_updates().map_err(|e| {
            error!(error = %e, "Failed to flush avatar changes");
            AvatarError::commit(e.to_string())
        })?;

        self.remember_upload(digest.clone());
        info!(%digest, "Avatar set successfully");
        Ok(SetAvatarOutcome::Uploaded(digest))
    }

    fn matches_last_upload(&self, digest: &ContentDigest) -> bool {
        self.last_uploaded
            .lock()
            .is_ok_and(|last| last.as_ref() == Some(digest))
    }

    fn remember_upload(&self, digest: ContentDigest) {
        if let Ok(mut last) = self.last_uploaded.lock() {
            *last = Some(digest);
        }
    }
}
