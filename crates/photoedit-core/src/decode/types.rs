//! Core types for image decoding.

use image::{DynamicImage, ImageBuffer};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file extension is not in the accepted upload list.
    #[error("Unsupported file extension: {0}")]
    UnsupportedExtension(String),

    /// The file format is not recognized or supported.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),
}

/// Pixel layout of a decoded image.
///
/// All modes store 8 bits per channel, interleaved, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PixelMode {
    /// Single luminance channel.
    Luma,
    /// Red, green, blue.
    #[default]
    Rgb,
    /// Red, green, blue, alpha.
    Rgba,
}

impl PixelMode {
    /// Number of bytes per pixel.
    #[inline]
    pub fn channels(self) -> usize {
        match self {
            PixelMode::Luma => 1,
            PixelMode::Rgb => 3,
            PixelMode::Rgba => 4,
        }
    }

    /// Number of color channels, i.e. excluding alpha.
    #[inline]
    pub fn color_channels(self) -> usize {
        match self {
            PixelMode::Luma => 1,
            PixelMode::Rgb | PixelMode::Rgba => 3,
        }
    }

    /// Returns true if the last channel is alpha.
    #[inline]
    pub fn has_alpha(self) -> bool {
        matches!(self, PixelMode::Rgba)
    }
}

/// A decoded image with 8-bit pixel data.
///
/// This is both the retained upload and the output of a render pass.
/// Operations never mutate an image in place; they return a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Channel layout of `pixels`.
    pub mode: PixelMode,
    /// Pixel data in row-major order.
    /// Length should be width * height * mode.channels().
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// Create a new DecodedImage with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, mode: PixelMode, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * mode.channels(),
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            mode,
            pixels,
        }
    }

    /// Create an image where every pixel has the same value.
    ///
    /// `pixel` must have exactly `mode.channels()` bytes.
    pub fn solid(width: u32, height: u32, mode: PixelMode, pixel: &[u8]) -> Self {
        debug_assert_eq!(pixel.len(), mode.channels());
        let pixels = pixel.repeat(width as usize * height as usize);
        Self::new(width, height, mode, pixels)
    }

    /// Create a DecodedImage from any image the `image` crate can produce.
    ///
    /// Grayscale stays single-channel, anything with alpha becomes RGBA,
    /// everything else RGB. Higher bit depths are reduced to 8 bits.
    pub fn from_dynamic(img: DynamicImage) -> Self {
        let color = img.color();
        if color.has_alpha() {
            let buf = img.into_rgba8();
            let (width, height) = buf.dimensions();
            Self::new(width, height, PixelMode::Rgba, buf.into_raw())
        } else if color.has_color() {
            let buf = img.into_rgb8();
            let (width, height) = buf.dimensions();
            Self::new(width, height, PixelMode::Rgb, buf.into_raw())
        } else {
            let buf = img.into_luma8();
            let (width, height) = buf.dimensions();
            Self::new(width, height, PixelMode::Luma, buf.into_raw())
        }
    }

    /// Convert to a DynamicImage for processing with the `image` crate.
    ///
    /// Returns `None` if the pixel buffer does not match the dimensions.
    pub fn to_dynamic(&self) -> Option<DynamicImage> {
        let (w, h, raw) = (self.width, self.height, self.pixels.clone());
        match self.mode {
            PixelMode::Luma => ImageBuffer::from_raw(w, h, raw).map(DynamicImage::ImageLuma8),
            PixelMode::Rgb => ImageBuffer::from_raw(w, h, raw).map(DynamicImage::ImageRgb8),
            PixelMode::Rgba => ImageBuffer::from_raw(w, h, raw).map(DynamicImage::ImageRgba8),
        }
    }

    /// Bytes per pixel.
    #[inline]
    pub fn channels(&self) -> usize {
        self.mode.channels()
    }

    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * self.channels()
    }

    /// Borrow the channels of the pixel at (x, y).
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let c = self.channels();
        let idx = y as usize * self.stride() + x as usize * c;
        &self.pixels[idx..idx + c]
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}
