//! Clipboard payload value object and source classification.

use base64::{Engine as _, engine::general_purpose};

/// Marker that introduces an inline image payload.
const DATA_URI_PREFIX: &str = "data:image/";

/// How the avatar bytes should be acquired for a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind<'a> {
    /// An inline `data:image/...;base64,...` payload; carries the base64
    /// text after the first comma.
    DataUri {
        /// The base64-encoded image bytes.
        encoded: &'a str,
    },
    /// A remote location to download.
    Url(&'a str),
}

/// Text captured from the system clipboard, classified lazily.
///
/// Created once per invocation and dropped with it. Empty or
/// whitespace-only clipboard content never becomes a payload; the
/// constructor returns `None` for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardPayload {
    text: String,
}

impl ClipboardPayload {
    /// Wraps clipboard text, rejecting empty or whitespace-only input.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return None;
        }
        Some(Self { text })
    }

    /// Returns the raw payload text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Classifies the payload.
    ///
    /// Inline images must start with `data:image/` and declare `base64`
    /// before the first comma; everything else, including `data:` URIs
    /// without a base64 marker, is treated as a URL.
    #[must_use]
    pub fn kind(&self) -> PayloadKind<'_> {
        if let Some(rest) = self.text.strip_prefix(DATA_URI_PREFIX) {
            match rest.split_once(',') {
                Some((header, encoded)) if header.contains("base64") => {
                    return PayloadKind::DataUri { encoded };
                }
                // A marked payload with no comma carries no image data;
                // let the decoder reject it rather than download garbage.
                None if rest.contains("base64") => {
                    return PayloadKind::DataUri { encoded: "" };
                }
                _ => {}
            }
        }
        PayloadKind::Url(&self.text)
    }

    /// Decodes the inline base64 image payload of a data URI.
    ///
    /// # Errors
    /// Returns the decoder's error when the payload is not canonical
    /// base64: length not a multiple of 4, non-alphabet characters, or
    /// malformed padding.
    pub fn decode_embedded(encoded: &str) -> Result<Vec<u8>, base64::DecodeError> {
        general_purpose::STANDARD.decode(encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_clipboard() {
        assert!(ClipboardPayload::new("").is_none());
        assert!(ClipboardPayload::new("   \n\t").is_none());
    }

    #[test]
    fn test_classifies_data_uri() {
        let payload = ClipboardPayload::new("data:image/png;base64,iVBORw0KGgo=").unwrap();
        assert_eq!(
            payload.kind(),
            PayloadKind::DataUri {
                encoded: "iVBORw0KGgo="
            }
        );
    }

    #[test]
    fn test_classifies_plain_url() {
        let payload = ClipboardPayload::new("https://example.com/cat.png").unwrap();
        assert_eq!(
            payload.kind(),
            PayloadKind::Url("https://example.com/cat.png")
        );
    }

    #[test]
    fn test_data_uri_without_base64_marker_is_a_url() {
        let payload = ClipboardPayload::new("data:image/svg+xml,<svg/>").unwrap();
        assert!(matches!(payload.kind(), PayloadKind::Url(_)));
    }

    #[test]
    fn test_base64_marker_must_precede_the_comma() {
        let payload = ClipboardPayload::new("data:image/png,base64stuff").unwrap();
        assert!(matches!(payload.kind(), PayloadKind::Url(_)));
    }

    #[test]
    fn test_marked_data_uri_without_comma_has_empty_payload() {
        let payload = ClipboardPayload::new("data:image/png;base64").unwrap();
        assert_eq!(payload.kind(), PayloadKind::DataUri { encoded: "" });
    }

    #[test]
    fn test_decode_round_trips_arbitrary_bytes() {
        let all_bytes: Vec<u8> = (0u8..=255).collect();
        for input in [&b""[..], &b"f"[..], &b"fo"[..], &b"foo"[..], &all_bytes[..]] {
            let encoded = general_purpose::STANDARD.encode(input);
            assert_eq!(encoded.len(), input.len().div_ceil(3) * 4);
            assert_eq!(
                ClipboardPayload::decode_embedded(&encoded).unwrap(),
                input,
                "round trip failed for {} bytes",
                input.len()
            );
        }
    }

    #[test]
    fn test_decode_rejects_length_not_multiple_of_four() {
        for bad in ["a", "ab", "abc", "abcde"] {
            assert!(ClipboardPayload::decode_embedded(bad).is_err());
        }
    }

    #[test]
    fn test_decode_strips_padding() {
        assert_eq!(ClipboardPayload::decode_embedded("TQ==").unwrap(), b"M");
        assert_eq!(ClipboardPayload::decode_embedded("TWE=").unwrap(), b"Ma");
        assert_eq!(ClipboardPayload::decode_embedded("TWFu").unwrap(), b"Man");
    }

    #[test]
    fn test_decode_rejects_non_alphabet_characters() {
        assert!(ClipboardPayload::decode_embedded("TQ%=").is_err());
    }
}
