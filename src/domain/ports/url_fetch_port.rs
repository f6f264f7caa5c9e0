//! URL fetch port definition.

use std::path::Path;

use thiserror::Error;

/// Errors from the URL fetch capability.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure: DNS, refused connection, timeout, TLS.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("server answered HTTP {status}")]
    Status {
        /// The HTTP status code.
        status: u16,
    },
    /// The response body could not be written to the destination.
    #[error("failed to write response body: {0}")]
    Io(String),
}

/// Port for fetching a remote URL straight into a local file.
///
/// One blocking GET, body streamed to the destination; no retries. Format
/// validation of whatever arrives is the normalizer's job, not the
/// fetcher's.
pub trait UrlFetchPort: Send + Sync {
    /// Downloads `url` into `destination`, truncating any existing file.
    ///
    /// # Errors
    /// Returns a [`FetchError`] on any transport error, non-2xx status, or
    /// local write failure.
    fn fetch_to_file(&self, url: &str, destination: &Path) -> Result<(), FetchError>;
}
