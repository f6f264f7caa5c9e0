//! Plugin data directory bootstrap.

use std::io;
use std::path::PathBuf;
use std::{env, fs};

use tracing::{debug, info};

const DIR_QUALIFIER: &str = "com";
const DIR_ORGANIZATION: &str = "tecknian";
const DIR_APPLICATION: &str = "clip-avatar";

/// Resolves and creates the directory holding the avatar candidate file.
///
/// An explicit override wins; otherwise the platform data directory, with
/// the system temp dir as a last resort. Performed once at wiring time;
/// the pipeline assumes the directory exists.
///
/// # Errors
/// Propagates the I/O error when the directory cannot be created.
pub fn prepare_data_dir(override_dir: Option<PathBuf>) -> io::Result<PathBuf> {
    let dir = override_dir.unwrap_or_else(default_data_dir);
    if dir.is_dir() {
        debug!(path = %dir.display(), "Plugin data directory already exists");
    } else {
        fs::create_dir_all(&dir)?;
        info!(path = %dir.display(), "Created plugin data directory");
    }
    Ok(dir)
}

fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from(DIR_QUALIFIER, DIR_ORGANIZATION, DIR_APPLICATION).map_or_else(
        || env::temp_dir().join("clip-avatar"),
        |dirs| dirs.data_dir().to_path_buf(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_missing_directories() {
        let temp = tempfile::tempdir().unwrap();
        let target = temp.path().join("plugins").join("clip-avatar");

        let dir = prepare_data_dir(Some(target.clone())).unwrap();

        assert_eq!(dir, target);
        assert!(dir.is_dir());
    }

    #[test]
    fn test_existing_directory_is_reused() {
        let temp = tempfile::tempdir().unwrap();
        let target = temp.path().to_path_buf();

        let first = prepare_data_dir(Some(target.clone())).unwrap();
        let second = prepare_data_dir(Some(target)).unwrap();

        assert_eq!(first, second);
    }
}
