//! JPEG encoding for download.
//!
//! This module provides JPEG encoding using the `image` crate's JPEG encoder.
//! JPEG has no alpha channel, so RGBA images are flattened to RGB by
//! dropping alpha.

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;

use super::{validate, EncodeError};
use crate::decode::{DecodedImage, PixelMode};

/// Encode an image to JPEG bytes.
///
/// # Arguments
///
/// * `image` - Image to encode (grayscale, RGB or RGBA)
/// * `quality` - JPEG quality (1-100, where 100 is highest quality)
///
/// # Returns
///
/// JPEG-encoded bytes on success, or an error if encoding fails.
///
/// # Quality Guidelines
///
/// * 90-100: High quality, suitable for archival or further editing
/// * 80-90: Good quality, recommended for most uses
/// * 60-80: Medium quality, acceptable for web/social media
/// * Below 60: Low quality, visible artifacts
pub fn encode_jpeg(image: &DecodedImage, quality: u8) -> Result<Vec<u8>, EncodeError> {
    validate(image)?;

    // Clamp quality to valid range (1-100)
    let quality = quality.clamp(1, 100);

    let (pixels, color) = match image.mode {
        PixelMode::Luma => (image.pixels.clone(), ExtendedColorType::L8),
        PixelMode::Rgb => (image.pixels.clone(), ExtendedColorType::Rgb8),
        PixelMode::Rgba => (
            image
                .pixels
                .chunks_exact(4)
                .flat_map(|px| [px[0], px[1], px[2]])
                .collect(),
            ExtendedColorType::Rgb8,
        ),
    };

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);

    encoder
        .write_image(&pixels, image.width, image.height, color)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating image dimensions (keep small for speed).
    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=50, 1u32..=50)
    }

    fn mode_strategy() -> impl Strategy<Value = PixelMode> {
        prop_oneof![
            Just(PixelMode::Luma),
            Just(PixelMode::Rgb),
            Just(PixelMode::Rgba),
        ]
    }

    proptest! {
        /// Property: Encoding always produces valid JPEG when given valid input.
        #[test]
        fn prop_valid_input_produces_valid_jpeg(
            (width, height) in dimensions_strategy(),
            mode in mode_strategy(),
            quality in 1u8..=100,
        ) {
            let size = width as usize * height as usize * mode.channels();
            let pixels: Vec<u8> = (0..size).map(|i| ((i * 37) % 256) as u8).collect();
            let img = DecodedImage::new(width, height, mode, pixels);

            let jpeg_bytes = encode_jpeg(&img, quality);
            prop_assert!(jpeg_bytes.is_ok(), "Valid input should produce valid output");

            let jpeg_bytes = jpeg_bytes.unwrap();
            let len = jpeg_bytes.len();
            prop_assert!(len >= 4, "JPEG should have at least 4 bytes");
            prop_assert_eq!(&jpeg_bytes[0..2], &[0xFF, 0xD8], "Should have SOI marker");
            prop_assert_eq!(&jpeg_bytes[len - 2..], &[0xFF, 0xD9], "Should have EOI marker");
        }

        /// Property: Same input always produces same output (deterministic).
        #[test]
        fn prop_deterministic_output(
            (width, height) in (1u32..=20, 1u32..=20),
            quality in 1u8..=100,
        ) {
            let img = DecodedImage::solid(width, height, PixelMode::Rgb, &[100, 100, 100]);

            let result1 = encode_jpeg(&img, quality).unwrap();
            let result2 = encode_jpeg(&img, quality).unwrap();
            prop_assert_eq!(result1, result2, "Same input should produce same output");
        }
    }
}
