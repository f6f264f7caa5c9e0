//! Avatar file naming and location.

use std::path::{Path, PathBuf};

use base64::{Engine as _, engine::general_purpose};

/// Base64 hash of the local client's numeric id.
///
/// The host names avatar files `avatar_<hash>` where `<hash>` is the
/// base64 encoding of the string `"<client id>="`, trailing `=` included.
/// Recomputed on every invocation; never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIdHash(String);

impl ClientIdHash {
    /// Computes the hash for a numeric client id.
    #[must_use]
    pub fn from_client_id(client_id: u64) -> Self {
        Self(general_purpose::STANDARD.encode(format!("{client_id}=")))
    }

    /// Returns the hash text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ClientIdHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The single well-known local file holding the current avatar candidate.
///
/// At most one exists per local client identity; each successful
/// acquisition overwrites it in place. Its content is the sole input to
/// hashing and upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarFile {
    path: PathBuf,
    file_name: String,
}

impl AvatarFile {
    /// Locates the avatar file for a client inside the plugin data dir.
    #[must_use]
    pub fn locate(data_dir: &Path, hash: &ClientIdHash) -> Self {
        let file_name = format!("avatar_{hash}");
        Self {
            path: data_dir.join(&file_name),
            file_name,
        }
    }

    /// Full path of the avatar candidate on disk.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name under the data dir, which is also the upload name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_id_hash_is_deterministic() {
        assert_eq!(ClientIdHash::from_client_id(8).as_str(), "OD0=");
        assert_eq!(ClientIdHash::from_client_id(123).as_str(), "MTIzPQ==");
        assert_eq!(
            ClientIdHash::from_client_id(42),
            ClientIdHash::from_client_id(42)
        );
    }

    #[test]
    fn test_avatar_file_naming() {
        let hash = ClientIdHash::from_client_id(8);
        let file = AvatarFile::locate(Path::new("/tmp/data"), &hash);
        assert_eq!(file.file_name(), "avatar_OD0=");
        assert_eq!(file.path(), Path::new("/tmp/data/avatar_OD0="));
    }
}
