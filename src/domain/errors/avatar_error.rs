//! Avatar pipeline error types.

use thiserror::Error;

/// Failure taxonomy for the avatar pipeline.
///
/// Every variant is terminal for the current invocation; stages never
/// retry. Which variants demand the compensating avatar deletion is
/// exposed through [`AvatarError::requires_rollback`].
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum AvatarError {
    #[error("own client id unavailable: {message}")]
    ClientIdUnavailable { message: String },

    #[error("clipboard has no usable text")]
    ClipboardEmpty,

    #[error("embedded image is invalid: {reason}")]
    InvalidEmbeddedImage { reason: String },

    #[error("download failed: {reason}")]
    DownloadFailed { reason: String },

    #[error("clipboard content is not an image: {reason}")]
    NotAnImage { reason: String },

    #[error("avatar is {actual} bytes, over the {limit} byte limit")]
    ImageTooLarge { actual: u64, limit: u64 },

    #[error("failed to hash avatar file: {reason}")]
    HashFailed { reason: String },

    #[error("host rejected the file upload: {reason}")]
    UploadFailed { reason: String },

    #[error("host rejected the avatar registration: {reason}")]
    RegistrationFailed { reason: String },

    #[error("host failed to commit avatar changes: {reason}")]
    CommitFailed { reason: String },
}

impl AvatarError {
    /// Creates a client-id lookup error.
    #[must_use]
    pub fn client_id_unavailable(message: impl Into<String>) -> Self {
        Self::ClientIdUnavailable {
            message: message.into(),
        }
    }

    /// Creates an embedded-image error.
    #[must_use]
    pub fn invalid_embedded(reason: impl Into<String>) -> Self {
        Self::InvalidEmbeddedImage {
            reason: reason.into(),
        }
    }

    /// Creates a download error.
    #[must_use]
    pub fn download(reason: impl Into<String>) -> Self {
        Self::DownloadFailed {
            reason: reason.into(),
        }
    }

    /// Creates a format-detection error.
    #[must_use]
    pub fn not_an_image(reason: impl Into<String>) -> Self {
        Self::NotAnImage {
            reason: reason.into(),
        }
    }

    /// Creates a hashing error.
    #[must_use]
    pub fn hash(reason: impl Into<String>) -> Self {
        Self::HashFailed {
            reason: reason.into(),
        }
    }

    /// Creates an upload error.
    #[must_use]
    pub fn upload(reason: impl Into<String>) -> Self {
        Self::UploadFailed {
            reason: reason.into(),
        }
    }

    /// Creates a registration error.
    #[must_use]
    pub fn registration(reason: impl Into<String>) -> Self {
        Self::RegistrationFailed {
            reason: reason.into(),
        }
    }

    /// Creates a commit error.
    #[must_use]
    pub fn commit(reason: impl Into<String>) -> Self {
        Self::CommitFailed {
            reason: reason.into(),
        }
    }

    /// Whether the failure may leave partially-registered avatar state
    /// behind, requiring the compensating deletion.
    ///
    /// Everything from source resolution onward qualifies; only failures
    /// before any disk or host state is touched are exempt.
    #[must_use]
    pub const fn requires_rollback(&self) -> bool {
        !matches!(
            self,
            Self::ClientIdUnavailable { .. } | Self::ClipboardEmpty
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pre_acquisition_failures_skip_rollback() {
        assert!(!AvatarError::client_id_unavailable("no session").requires_rollback());
        assert!(!AvatarError::ClipboardEmpty.requires_rollback());
    }

    #[test]
    fn test_pipeline_failures_require_rollback() {
        assert!(AvatarError::download("404").requires_rollback());
        assert!(AvatarError::not_an_image("unknown format").requires_rollback());
        assert!(
            AvatarError::ImageTooLarge {
                actual: 300_000,
                limit: 200_000
            }
            .requires_rollback()
        );
        assert!(AvatarError::upload("transfer refused").requires_rollback());
    }
}
