//! Clipboard content resolution: inline decode or download.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, error, info};

use crate::domain::entities::{ClipboardPayload, PayloadKind};
use crate::domain::errors::AvatarError;
use crate::domain::ports::UrlFetchPort;

/// Turns a classified clipboard payload into image bytes on disk.
pub struct ContentResolver {
    fetcher: Arc<dyn UrlFetchPort>,
}

impl ContentResolver {
    /// Creates a resolver over the given fetch capability.
    #[must_use]
    pub fn new(fetcher: Arc<dyn UrlFetchPort>) -> Self {
        Self { fetcher }
    }

    /// Writes the payload's image bytes to `destination`.
    ///
    /// Inline data URIs are base64-decoded, sniffed in memory, and written
    /// out; anything else is treated as a URL and downloaded with a single
    /// blocking GET streamed to the destination. Format validation of
    /// downloaded bytes is deferred to the normalizer.
    ///
    /// # Errors
    /// `InvalidEmbeddedImage` when the inline payload does not decode to a
    /// known image format or cannot be written; `DownloadFailed` on any
    /// transport error or non-success status.
    pub fn resolve(
        &self,
        payload: &ClipboardPayload,
        destination: &Path,
    ) -> Result<(), AvatarError> {
        match payload.kind() {
            PayloadKind::DataUri { encoded } => Self::write_embedded(encoded, destination),
            PayloadKind::Url(url) => self.download(url, destination),
        }
    }

    fn write_embedded(encoded: &str, destination: &Path) -> Result<(), AvatarError> {
        debug!(encoded_len = encoded.len(), "Decoding inline image payload");

        let bytes = ClipboardPayload::decode_embedded(encoded)
            .map_err(|e| AvatarError::invalid_embedded(format!("base64 decode failed: {e}")))?;

        // Sniff in memory before anything touches the avatar path.
        if image::guess_format(&bytes).is_err() {
            return Err(AvatarError::invalid_embedded(
                "decoded payload is not a recognized image format",
            ));
        }

        fs::write(destination, &bytes).map_err(|e| {
            AvatarError::invalid_embedded(format!("failed to write decoded image: {e}"))
        })?;

        info!(
            bytes = bytes.len(),
            path = %destination.display(),
            "Wrote inline image to avatar file"
        );
        Ok(())
    }

    fn download(&self, url: &str, destination: &Path) -> Result<(), AvatarError> {
        debug!(url, "Downloading avatar candidate");

        self.fetcher.fetch_to_file(url, destination).map_err(|e| {
            error!(url, error = %e, "Download of image failed");
            AvatarError::download(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockUrlFetcher;
    use base64::{Engine as _, engine::general_purpose};

    fn tiny_png() -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(1, 1, image::Rgba([255, 0, 0, 255]));
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();
        buf
    }

    fn resolver_with(fetcher: MockUrlFetcher) -> ContentResolver {
        ContentResolver::new(Arc::new(fetcher))
    }

    #[test]
    fn test_data_uri_writes_exactly_the_decoded_bytes() {
        let png = tiny_png();
        let uri = format!(
            "data:image/png;base64,{}",
            general_purpose::STANDARD.encode(&png)
        );
        let payload = ClipboardPayload::new(uri).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("avatar");

        let resolver = resolver_with(MockUrlFetcher::serving(Vec::new()));
        resolver.resolve(&payload, &dest).unwrap();

        assert_eq!(fs::read(&dest).unwrap(), png);
    }

    #[test]
    fn test_data_uri_with_broken_base64_fails() {
        let payload = ClipboardPayload::new("data:image/png;base64,not-base64!").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("avatar");

        let resolver = resolver_with(MockUrlFetcher::serving(Vec::new()));
        let err = resolver.resolve(&payload, &dest).unwrap_err();

        assert!(matches!(err, AvatarError::InvalidEmbeddedImage { .. }));
        assert!(!dest.exists());
    }

    #[test]
    fn test_data_uri_with_non_image_bytes_fails() {
        let uri = format!(
            "data:image/png;base64,{}",
            general_purpose::STANDARD.encode(b"plain text, no magic")
        );
        let payload = ClipboardPayload::new(uri).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("avatar");

        let resolver = resolver_with(MockUrlFetcher::serving(Vec::new()));
        let err = resolver.resolve(&payload, &dest).unwrap_err();

        assert!(matches!(err, AvatarError::InvalidEmbeddedImage { .. }));
        assert!(!dest.exists());
    }

    #[test]
    fn test_url_payload_is_downloaded_to_destination() {
        let payload = ClipboardPayload::new("https://example.com/cat.png").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("avatar");

        let fetcher = Arc::new(MockUrlFetcher::serving(b"fake body".to_vec()));
        let resolver = ContentResolver::new(fetcher.clone());
        resolver.resolve(&payload, &dest).unwrap();

        assert_eq!(fs::read(&dest).unwrap(), b"fake body");
        assert_eq!(fetcher.requests(), vec!["https://example.com/cat.png"]);
    }

    #[test]
    fn test_http_error_maps_to_download_failed() {
        let payload = ClipboardPayload::new("https://example.com/missing.png").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("avatar");

        let resolver = resolver_with(MockUrlFetcher::failing_with_status(404));
        let err = resolver.resolve(&payload, &dest).unwrap_err();

        assert!(matches!(err, AvatarError::DownloadFailed { .. }));
        assert!(!dest.exists());
    }
}
