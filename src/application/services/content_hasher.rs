//! Content hashing of the avatar candidate.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use md5::{Digest, Md5};

use crate::domain::entities::ContentDigest;
use crate::domain::errors::AvatarError;

const HASH_CHUNK_SIZE: usize = 1024;

/// Streams the file through MD5 and renders the digest as lowercase hex.
///
/// MD5 is the digest the host protocol identifies avatars by; it is kept
/// for its fixed-width identifiers, not as a security boundary.
///
/// # Errors
/// `HashFailed` when the file cannot be opened or read.
pub fn digest_file(path: &Path) -> Result<ContentDigest, AvatarError> {
    let mut file = File::open(path).map_err(|e| {
        AvatarError::hash(format!("error opening {} for hashing: {e}", path.display()))
    })?;

    let mut hasher = Md5::new();
    let mut chunk = [0u8; HASH_CHUNK_SIZE];
    loop {
        let read = file
            .read(&mut chunk)
            .map_err(|e| AvatarError::hash(format!("read failed: {e}")))?;
        if read == 0 {
            break;
        }
        hasher.update(&chunk[..read]);
    }

    Ok(ContentDigest::new(hex::encode(hasher.finalize())))
}
