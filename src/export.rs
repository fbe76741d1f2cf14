//! PNG export for the composited icon.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use tracing::debug;

use crate::error::RenderError;

/// Writes the image to `path` as an RGBA PNG.
///
/// Uses the encoder's best compression with adaptive filtering, the
/// counterpart of an optimized export. The parent directory must exist.
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<(), RenderError> {
    debug!(path = %path.display(), "encoding PNG");
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, CompressionType::Best, FilterType::Adaptive);
    encoder.write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn written_png_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");

        let img = RgbaImage::from_pixel(16, 16, Rgba([99, 102, 241, 200]));
        write_png(&img, &path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded.dimensions(), (16, 16));
        assert_eq!(loaded.get_pixel(8, 8).0, [99, 102, 241, 200]);
    }

    #[test]
    fn missing_directory_fails_without_creating_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("icon.png");

        let img = RgbaImage::new(4, 4);
        let err = write_png(&img, &path).unwrap_err();
        assert!(matches!(err, RenderError::Io(_)));
        assert!(!path.exists());
    }
}
