//! Post-normalization size policy.

use std::fs;
use std::path::Path;

use tracing::{debug, error};

use crate::domain::errors::AvatarError;

/// The host's ceiling on avatar payloads, in bytes.
pub const DEFAULT_MAX_AVATAR_BYTES: u64 = 200_000;

/// Enforces the host's avatar size ceiling after normalization.
#[derive(Debug, Clone, Copy)]
pub struct SizeGuard {
    limit: u64,
}

impl SizeGuard {
    /// Creates a guard with the given byte limit.
    #[must_use]
    pub const fn new(limit: u64) -> Self {
        Self { limit }
    }

    /// Checks the normalized avatar file against the ceiling.
    ///
    /// # Errors
    /// `ImageTooLarge` when the file exceeds the limit. A missing file is
    /// unreachable given the prior stages' contracts and maps to
    /// `NotAnImage` defensively.
    pub fn check(&self, path: &Path) -> Result<u64, AvatarError> {
        let size = fs::metadata(path)
            .map(|m| m.len())
            .map_err(|e| AvatarError::not_an_image(format!("avatar file unreadable: {e}")))?;

        if size > self.limit {
            error!(size, limit = self.limit, "Avatar exceeds host size limit");
            return Err(AvatarError::ImageTooLarge {
                actual: size,
                limit: self.limit,
            });
        }

        debug!(size, "Avatar within size limit");
        Ok(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admits_file_at_exactly_the_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avatar");
        fs::write(&path, vec![0u8; 200_000]).unwrap();

        let size = SizeGuard::new(DEFAULT_MAX_AVATAR_BYTES).check(&path).unwrap();
        assert_eq!(size, 200_000);
    }

    #[test]
    fn test_rejects_file_over_the_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avatar");
        fs::write(&path, vec![0u8; 200_001]).unwrap();

        let err = SizeGuard::new(DEFAULT_MAX_AVATAR_BYTES)
            .check(&path)
            .unwrap_err();
        assert!(matches!(
            err,
            AvatarError::ImageTooLarge {
                actual: 200_001,
                limit: 200_000
            }
        ));
    }

    #[test]
    fn test_missing_file_maps_to_not_an_image() {
        let dir = tempfile::tempdir().unwrap();
        let err = SizeGuard::new(DEFAULT_MAX_AVATAR_BYTES)
            .check(&dir.path().join("gone"))
            .unwrap_err();
        assert!(matches!(err, AvatarError::NotAnImage { .. }));
    }
}
