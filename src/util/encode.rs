//! PNG encoding for composited mockups
//!
//! Mockups are always written as RGBA8 PNG. Compression level is adjustable;
//! the default uses adaptive per-scanline filtering.
//!
//! # Examples
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use device_mockup::util::encode::encode_png;
//!
//! let canvas = RgbaImage::from_pixel(64, 64, Rgba([255, 255, 255, 255]));
//! let bytes = encode_png(&canvas).unwrap();
//! assert!(bytes.starts_with(b"\x89PNG"));
//! ```

use std::io::Cursor;

use image::{
    ImageEncoder, RgbaImage,
    codecs::png::{CompressionType, FilterType, PngEncoder},
};

use crate::error::{MockupError, MockupResult};

/// Encodes an RGBA canvas as PNG with default compression
pub fn encode_png(canvas: &RgbaImage) -> MockupResult<Vec<u8>> {
    encode_png_with_compression(canvas, CompressionType::Default)
}

/// Encodes an RGBA canvas as PNG with the given compression level
///
/// Higher compression levels produce smaller files but take longer to
/// encode.
pub fn encode_png_with_compression(
    canvas: &RgbaImage,
    compression: CompressionType,
) -> MockupResult<Vec<u8>> {
    let (width, height) = canvas.dimensions();
    if width == 0 || height == 0 {
        return Err(MockupError::EncodingFailed {
            format: "png".to_string(),
            reason: format!("canvas has zero area ({width}x{height})"),
        });
    }

    let mut output = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(Cursor::new(&mut output), compression, FilterType::Adaptive);

    encoder
        .write_image(canvas.as_raw(), width, height, image::ExtendedColorType::Rgba8)
        .map_err(|e| MockupError::EncodingFailed {
            format: "png".to_string(),
            reason: e.to_string(),
        })?;

    tracing::debug!("Encoded {}x{} PNG ({} bytes)", width, height, output.len());
    Ok(output)
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;

    fn gradient(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
        })
    }

    #[test]
    fn test_encode_png_decodes_back_to_same_pixels() {
        let canvas = gradient(40, 30);
        let bytes = encode_png(&canvas).unwrap();

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded, canvas);
    }

    #[test]
    fn test_best_compression_not_larger_than_fast() {
        let canvas = gradient(256, 256);

        let fast = encode_png_with_compression(&canvas, CompressionType::Fast).unwrap();
        let best = encode_png_with_compression(&canvas, CompressionType::Best).unwrap();

        assert!(best.len() <= fast.len());
    }

    #[test]
    fn test_zero_area_canvas_rejected() {
        let canvas = RgbaImage::new(0, 10);
        let err = encode_png(&canvas).unwrap_err();
        assert!(matches!(err, MockupError::EncodingFailed { .. }));
    }
}
