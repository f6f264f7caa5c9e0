//! Content digest value object.

use std::fmt;

/// Fixed-length lowercase-hex digest identifying normalized avatar content.
///
/// Used both for duplicate suppression against the previous upload and as
/// the opaque avatar identifier registered with the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentDigest(String);

impl ContentDigest {
    /// Wraps a digest already rendered as lowercase hex.
    #[must_use]
    pub fn new(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    /// Returns the digest text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
