//! Image encoding WASM bindings.
//!
//! This module exposes the photoedit-core PNG and JPEG encoders to
//! JavaScript for the download button.
//!
//! # Functions
//!
//! - [`encode_png`] - Encode a JsRenderedImage to PNG bytes
//! - [`encode_jpeg`] - Encode a JsRenderedImage to JPEG bytes
//!
//! # Example
//!
//! ```typescript
//! import { encode_png } from '@photoedit/wasm';
//!
//! const png = encode_png(image);
//! const url = URL.createObjectURL(new Blob([png], { type: 'image/png' }));
//! ```

use crate::types::JsRenderedImage;
use photoedit_core::encode;
use wasm_bindgen::prelude::*;

/// Encode a rendered image to PNG bytes.
///
/// Grayscale, RGB and RGBA images are written in their own color type.
#[wasm_bindgen]
pub fn encode_png(image: &JsRenderedImage) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(image.as_decoded()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a rendered image to JPEG bytes.
///
/// # Arguments
///
/// * `image` - The rendered image to encode
/// * `quality` - JPEG quality (1-100, recommended: 90)
///
/// Alpha is dropped; JPEG has no transparency.
#[wasm_bindgen]
pub fn encode_jpeg(image: &JsRenderedImage, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(image.as_decoded(), quality).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use photoedit_core::decode::{DecodedImage, PixelMode};

    #[test]
    fn test_encode_png_from_image() {
        let img = JsRenderedImage::from_decoded(DecodedImage::solid(10, 10, PixelMode::Luma, &[76]));
        let png = encode_png(&img).ok().unwrap();
        assert_eq!(&png[1..4], b"PNG");
    }

    #[test]
    fn test_encode_jpeg_from_image() {
        let img = JsRenderedImage::from_decoded(DecodedImage::solid(
            10,
            10,
            PixelMode::Rgba,
            &[128, 128, 128, 255],
        ));
        let jpeg = encode_jpeg(&img, 90).ok().unwrap();
        // Verify JPEG magic bytes
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }
}
