//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core photoedit
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use photoedit_core::decode::{DecodedImage, PixelMode};
use photoedit_core::transform::InterpolationFilter;
use wasm_bindgen::prelude::*;

/// A rendered image for JavaScript.
///
/// Pixels are row-major with `channels` bytes per pixel: 1 for grayscale
/// output, 3 for RGB, 4 for RGBA. Use [`JsRenderedImage::to_rgba`] to get a
/// buffer that can go straight into a canvas `ImageData`.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. `pixels()` and `to_rgba()` copy
/// it into a JavaScript `Uint8Array`.
#[wasm_bindgen]
pub struct JsRenderedImage {
    inner: DecodedImage,
}

#[wasm_bindgen]
impl JsRenderedImage {
    /// Create an image from dimensions, channel count and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `channels` - 1 (grayscale), 3 (RGB) or 4 (RGBA)
    /// * `pixels` - Row-major pixel data
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: u32,
        height: u32,
        channels: u8,
        pixels: Vec<u8>,
    ) -> Result<JsRenderedImage, JsValue> {
        let mode = mode_from_channels(channels)
            .ok_or_else(|| JsValue::from_str(&format!("Unsupported channel count: {}", channels)))?;
        let expected = width as usize * height as usize * mode.channels();
        if pixels.len() != expected {
            return Err(JsValue::from_str(&format!(
                "Invalid pixel data: expected {} bytes, got {}",
                expected,
                pixels.len()
            )));
        }
        Ok(Self {
            inner: DecodedImage::new(width, height, mode, pixels),
        })
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Bytes per pixel
    #[wasm_bindgen(getter)]
    pub fn channels(&self) -> u8 {
        self.inner.channels() as u8
    }

    /// Get the number of bytes in the pixel buffer
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.pixels.len()
    }

    /// Returns the pixel data as a Uint8Array (copied).
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels.clone()
    }

    /// Returns the pixel data expanded to RGBA, opaque where the image
    /// has no alpha.
    pub fn to_rgba(&self) -> Vec<u8> {
        match self.inner.mode {
            PixelMode::Rgba => self.inner.pixels.clone(),
            PixelMode::Rgb => self
                .inner
                .pixels
                .chunks_exact(3)
                .flat_map(|p| [p[0], p[1], p[2], 255])
                .collect(),
            PixelMode::Luma => self
                .inner
                .pixels
                .iter()
                .flat_map(|&v| [v, v, v, 255])
                .collect(),
        }
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsRenderedImage {
    pub(crate) fn from_decoded(img: DecodedImage) -> Self {
        Self { inner: img }
    }

    pub(crate) fn as_decoded(&self) -> &DecodedImage {
        &self.inner
    }
}

fn mode_from_channels(channels: u8) -> Option<PixelMode> {
    match channels {
        1 => Some(PixelMode::Luma),
        3 => Some(PixelMode::Rgb),
        4 => Some(PixelMode::Rgba),
        _ => None,
    }
}

/// Convert a u8 value to the rotation sampling filter.
///
/// Values:
/// - 0 = Nearest (default)
/// - 1 = Bilinear
///
/// Any other value defaults to Nearest.
pub(crate) fn interpolation_from_u8(value: u8) -> InterpolationFilter {
    match value {
        1 => InterpolationFilter::Bilinear,
        _ => InterpolationFilter::Nearest,
    }
}
