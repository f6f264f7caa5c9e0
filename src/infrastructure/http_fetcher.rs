//! Blocking HTTP fetch adapter.

use std::fs::File;
use std::path::Path;
use std::time::Duration;

use tracing::debug;

use crate::domain::ports::{FetchError, UrlFetchPort};

/// Default request timeout, in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Blocking `reqwest` client that streams response bodies to disk.
pub struct HttpUrlFetcher {
    client: reqwest::blocking::Client,
}

impl HttpUrlFetcher {
    /// Creates a fetcher with the given request timeout.
    ///
    /// # Errors
    /// Returns an error when the HTTP client cannot be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| FetchError::Transport(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

impl UrlFetchPort for HttpUrlFetcher {
    fn fetch_to_file(&self, url: &str, destination: &Path) -> Result<(), FetchError> {
        let mut response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::Transport(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        // Only touch the destination once the server has answered.
        let mut file = File::create(destination).map_err(|e| {
            FetchError::Io(format!("failed to create {}: {e}", destination.display()))
        })?;

        let bytes = response
            .copy_to(&mut file)
            .map_err(|e| FetchError::Io(format!("failed to stream body: {e}")))?;

        debug!(url, bytes, path = %destination.display(), "Downloaded avatar candidate");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetcher_creation() {
        assert!(HttpUrlFetcher::new(DEFAULT_HTTP_TIMEOUT_SECS).is_ok());
    }
}
