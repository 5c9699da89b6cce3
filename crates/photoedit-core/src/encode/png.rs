//! PNG encoding of rendered images.

use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::{validate, EncodeError};
use crate::decode::{DecodedImage, PixelMode};

/// Encode an image to PNG bytes, keeping its pixel mode.
///
/// # Errors
///
/// Returns `InvalidDimensions` or `InvalidPixelData` for inconsistent
/// buffers, `EncodingFailed` if the encoder itself fails.
pub fn encode_png(image: &DecodedImage) -> Result<Vec<u8>, EncodeError> {
    validate(image)?;

    let color = match image.mode {
        PixelMode::Luma => ExtendedColorType::L8,
        PixelMode::Rgb => ExtendedColorType::Rgb8,
        PixelMode::Rgba => ExtendedColorType::Rgba8,
    };

    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(&image.pixels, image.width, image.height, color)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}
