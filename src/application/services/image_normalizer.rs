//! Avatar image validation and bounded resize.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, imageops::FilterType};
use tracing::{debug, warn};

use crate::domain::errors::AvatarError;

/// Default bounding box, in pixels, applied to both axes.
pub const DEFAULT_RESIZE_BOUND: u32 = 300;

/// Validates and shrinks the avatar candidate in place.
#[derive(Debug, Clone)]
pub struct ImageNormalizer {
    bound: u32,
}

impl ImageNormalizer {
    /// Creates a normalizer with the given bounding box.
    #[must_use]
    pub const fn new(bound: u32) -> Self {
        Self { bound }
    }

    /// Validates that the file holds a decodable image and resizes it to
    /// fit the bounding box, preserving aspect ratio.
    ///
    /// Only an unrecognizable format is fatal. A sniffable image that then
    /// fails to decode, resize, or re-encode is left on disk untouched and
    /// reported as success; the original is still a valid upload.
    ///
    /// # Errors
    /// `NotAnImage` when the bytes have no recognizable image format or
    /// the file cannot be read back.
    pub fn normalize(&self, path: &Path) -> Result<(), AvatarError> {
        let bytes = fs::read(path)
            .map_err(|e| AvatarError::not_an_image(format!("failed to read avatar file: {e}")))?;

        let format = image::guess_format(&bytes)
            .map_err(|_| AvatarError::not_an_image("unrecognized image format"))?;

        // Re-encoding a GIF keeps only the first frame; known broken, so
        // the original is uploaded as-is.
        if format == ImageFormat::Gif {
            debug!("Skipping resize for animated format");
            return Ok(());
        }

        let img = match image::load_from_memory_with_format(&bytes, format) {
            Ok(img) => img,
            Err(e) => {
                warn!(error = %e, "Image sniffed but failed to decode, uploading unresized");
                return Ok(());
            }
        };

        let (width, height) = (img.width(), img.height());
        let Some((target_w, target_h)) = target_dimensions(width, height, self.bound) else {
            debug!(width, height, "Image already within bounds");
            return Ok(());
        };

        let resized = img.resize_exact(target_w, target_h, FilterType::Triangle);

        // Encode into memory first so an encoder failure cannot clobber
        // the original file.
        let mut encoded = Vec::new();
        if let Err(e) = resized.write_to(&mut Cursor::new(&mut encoded), format) {
            warn!(error = %e, "Re-encode failed, uploading unresized");
            return Ok(());
        }
        if let Err(e) = fs::write(path, &encoded) {
            warn!(error = %e, "Failed to write resized avatar, uploading unresized");
            return Ok(());
        }

        debug!(
            width,
            height, target_w, target_h, "Resized avatar to fit bounding box"
        );
        Ok(())
    }
}

/// Computes the bounded dimensions, or `None` when no resize is needed.
///
/// The larger axis is pinned to the bound and the other scaled to keep the
/// aspect ratio, never below one pixel.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn target_dimensions(width: u32, height: u32, bound: u32) -> Option<(u32, u32)> {
    if width <= bound && height <= bound {
        return None;
    }
    let (w, h) = (f64::from(width), f64::from(height));
    let (target_w, target_h) = if width >= height {
        (bound, (f64::from(bound) * h / w).round() as u32)
    } else {
        ((f64::from(bound) * w / h).round() as u32, bound)
    };
    Some((target_w.max(1), target_h.max(1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, RgbaImage};

    fn write_image(dir: &Path, name: &str, width: u32, height: u32, format: ImageFormat) -> std::path::PathBuf {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            width,
            height,
            image::Rgba([0, 128, 255, 255]),
        ));
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), format).unwrap();
        let path = dir.join(name);
        fs::write(&path, buf).unwrap();
        path
    }

    fn dimensions_of(path: &Path) -> (u32, u32) {
        let img = image::load_from_memory(&fs::read(path).unwrap()).unwrap();
        (img.width(), img.height())
    }

    #[test]
    fn test_wide_image_is_bounded_by_width() {
        assert_eq!(target_dimensions(400, 200, 300), Some((300, 150)));
    }

    #[test]
    fn test_tall_image_is_bounded_by_height() {
        assert_eq!(target_dimensions(200, 400, 300), Some((150, 300)));
    }

    #[test]
    fn test_small_image_needs_no_resize() {
        assert_eq!(target_dimensions(200, 200, 300), None);
    }

    #[test]
    fn test_extreme_aspect_ratio_never_reaches_zero() {
        assert_eq!(target_dimensions(10_000, 2, 300), Some((300, 1)));
    }

    #[test]
    fn test_oversized_png_is_resized_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_image(dir.path(), "avatar", 400, 200, ImageFormat::Png);

        ImageNormalizer::new(300).normalize(&path).unwrap();

        assert_eq!(dimensions_of(&path), (300, 150));
    }

    #[test]
    fn test_small_png_is_left_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_image(dir.path(), "avatar", 200, 200, ImageFormat::Png);
        let before = fs::read(&path).unwrap();

        ImageNormalizer::new(300).normalize(&path).unwrap();

        assert_eq!(fs::read(&path).unwrap(), before);
    }

    #[test]
    fn test_gif_passes_through_unmodified() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_image(dir.path(), "avatar", 500, 500, ImageFormat::Gif);
        let before = fs::read(&path).unwrap();

        ImageNormalizer::new(300).normalize(&path).unwrap();

        assert_eq!(fs::read(&path).unwrap(), before);
    }

    #[test]
    fn test_non_image_bytes_are_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avatar");
        fs::write(&path, b"definitely not an image").unwrap();

        let err = ImageNormalizer::new(300).normalize(&path).unwrap_err();

        assert!(matches!(err, AvatarError::NotAnImage { .. }));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = ImageNormalizer::new(300)
            .normalize(&dir.path().join("gone"))
            .unwrap_err();

        assert!(matches!(err, AvatarError::NotAnImage { .. }));
    }
}
