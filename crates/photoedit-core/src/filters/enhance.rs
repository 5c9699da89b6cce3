//! Brightness, contrast and saturation enhancement.
//!
//! Each enhancement blends the image with a "degenerate" version of itself:
//!
//! | Enhancement | Degenerate image |
//! |---|---|
//! | Brightness | black |
//! | Contrast | uniform gray at the image's mean luma |
//! | Saturation | the image's own per-pixel luma |
//!
//! `out = degenerate + (in - degenerate) * factor`, so a factor of 1.0 is
//! the identity, 0.0 gives the degenerate image, and values above 1.0
//! extrapolate away from it. Results are clamped to 0..=255.

use crate::decode::{DecodedImage, PixelMode};
use crate::luminance::calculate_luma_u8;

/// Slider value that maps to a factor of 1.0.
const NEUTRAL_DIVISOR: f32 = 50.0;

/// Convert a slider intensity (1-100) to an enhancement factor.
///
/// 50 is neutral; the factor is not capped above.
#[inline]
pub fn intensity_factor(intensity: u8) -> f32 {
    intensity as f32 / NEUTRAL_DIVISOR
}

/// Scale every color channel towards black (`factor < 1`) or away from it.
pub fn adjust_brightness(image: &DecodedImage, factor: f32) -> DecodedImage {
    blend_each(image, factor, |_| [0.0; 3])
}

/// Scale color channels about the image's mean luma.
pub fn adjust_contrast(image: &DecodedImage, factor: f32) -> DecodedImage {
    let mean = mean_luma(image) as f32;
    blend_each(image, factor, |_| [mean; 3])
}

/// Scale each pixel's chroma about its own luma.
///
/// Grayscale images have no chroma and are returned unchanged.
pub fn adjust_saturation(image: &DecodedImage, factor: f32) -> DecodedImage {
    if image.mode == PixelMode::Luma {
        return image.clone();
    }
    blend_each(image, factor, |px| {
        let l = calculate_luma_u8(px[0], px[1], px[2]) as f32;
        [l; 3]
    })
}

/// Mean luma over all pixels, rounded to the nearest integer.
fn mean_luma(image: &DecodedImage) -> u8 {
    let channels = image.channels();
    let count = image.pixels.len() / channels;
    if count == 0 {
        return 0;
    }

    let sum: u64 = image
        .pixels
        .chunks_exact(channels)
        .map(|px| match image.mode {
            PixelMode::Luma => px[0] as u64,
            PixelMode::Rgb | PixelMode::Rgba => calculate_luma_u8(px[0], px[1], px[2]) as u64,
        })
        .sum();

    ((sum as f64 / count as f64) + 0.5) as u8
}

/// Blend every pixel's color channels with `degenerate(pixel)`.
#[inline]
fn blend_each<F>(image: &DecodedImage, factor: f32, degenerate: F) -> DecodedImage
where
    F: Fn(&[u8]) -> [f32; 3],
{
    // Early exit if the blend is the identity
    if factor == 1.0 {
        return image.clone();
    }

    let channels = image.channels();
    let color_channels = image.mode.color_channels();

    let mut pixels = image.pixels.clone();
    for px in pixels.chunks_exact_mut(channels) {
        let base = degenerate(px);
        for (i, v) in px[..color_channels].iter_mut().enumerate() {
            let out = base[i] + (*v as f32 - base[i]) * factor;
            *v = out.clamp(0.0, 255.0) as u8;
        }
    }

    DecodedImage {
        width: image.width,
        height: image.height,
        mode: image.mode,
        pixels,
    }
}
