//! Per-pixel color mapping: grayscale, sepia and inversion.

use crate::decode::{DecodedImage, PixelMode};
use crate::luminance::calculate_luma_u8;

/// Sepia gradient color for luma 0.
pub const SEPIA_SHADOW: [u8; 3] = [210, 180, 140];

/// Sepia gradient color for luma 255.
pub const SEPIA_HIGHLIGHT: [u8; 3] = [255, 255, 255];

/// Convert to a single-channel luma image. Alpha is dropped.
pub fn grayscale(image: &DecodedImage) -> DecodedImage {
    let pixels = match image.mode {
        PixelMode::Luma => return image.clone(),
        PixelMode::Rgb | PixelMode::Rgba => image
            .pixels
            .chunks_exact(image.channels())
            .map(|px| calculate_luma_u8(px[0], px[1], px[2]))
            .collect(),
    };

    DecodedImage {
        width: image.width,
        height: image.height,
        mode: PixelMode::Luma,
        pixels,
    }
}

/// Map each luma value onto the gradient from `shadow` to `highlight`.
///
/// `image` is converted to luma first. The result is always RGB.
pub fn colorize(image: &DecodedImage, shadow: [u8; 3], highlight: [u8; 3]) -> DecodedImage {
    let gray = grayscale(image);

    // One lookup entry per luma level
    let lut: Vec<[u8; 3]> = (0..=255u32)
        .map(|l| {
            let mut c = [0u8; 3];
            for i in 0..3 {
                let (lo, hi) = (shadow[i] as i32, highlight[i] as i32);
                c[i] = (lo + (hi - lo) * l as i32 / 255) as u8;
            }
            c
        })
        .collect();

    let pixels = gray
        .pixels
        .iter()
        .flat_map(|&l| lut[l as usize])
        .collect();

    DecodedImage {
        width: image.width,
        height: image.height,
        mode: PixelMode::Rgb,
        pixels,
    }
}

/// Sepia tone: luma mapped from tan shadows to white highlights.
pub fn sepia(image: &DecodedImage) -> DecodedImage {
    colorize(image, SEPIA_SHADOW, SEPIA_HIGHLIGHT)
}

/// Invert every color channel (`255 - v`). Alpha is kept.
pub fn invert(image: &DecodedImage) -> DecodedImage {
    let channels = image.channels();
    let color_channels = image.mode.color_channels();

    let mut pixels = image.pixels.clone();
    for px in pixels.chunks_exact_mut(channels) {
        for v in &mut px[..color_channels] {
            *v = 255 - *v;
        }
    }

    DecodedImage {
        width: image.width,
        height: image.height,
        mode: image.mode,
        pixels,
    }
}
