//! Gaussian and box blur.

use crate::decode::DecodedImage;

/// Gaussian blur with standard deviation `sigma`, via the `image` crate.
///
/// Alpha is restored from the source after blurring.
pub fn gaussian_blur(image: &DecodedImage, sigma: f32) -> DecodedImage {
    let Some(dynamic) = image.to_dynamic() else {
        tracing::warn!(
            width = image.width,
            height = image.height,
            len = image.pixels.len(),
            "pixel buffer does not match dimensions, skipping gaussian blur"
        );
        return image.clone();
    };

    let mut blurred = DecodedImage::from_dynamic(dynamic.blur(sigma));

    if image.mode.has_alpha() {
        for (dst, src) in blurred
            .pixels
            .chunks_exact_mut(4)
            .zip(image.pixels.chunks_exact(4))
        {
            dst[3] = src[3];
        }
    }

    blurred
}

/// Mean over a `(2 * radius + 1)` square window, edge pixels extended.
///
/// Implemented as a horizontal pass followed by a vertical pass, each
/// rounding to the nearest integer.
pub fn box_blur(image: &DecodedImage, radius: u32) -> DecodedImage {
    if radius == 0 || image.is_empty() {
        return image.clone();
    }

    let horizontal = DecodedImage {
        pixels: box_pass(image, radius as usize, true),
        ..image.clone()
    };
    let pixels = box_pass(&horizontal, radius as usize, false);

    DecodedImage {
        pixels,
        ..horizontal
    }
}

/// One-dimensional running mean over color channels.
fn box_pass(image: &DecodedImage, radius: usize, horizontal: bool) -> Vec<u8> {
    let (w, h) = (image.width as usize, image.height as usize);
    let channels = image.channels();
    let color_channels = image.mode.color_channels();
    let window = 2 * radius + 1;
    let src = &image.pixels;
    let mut out = src.clone();

    // Length of one line along the pass direction, and the number of lines
    let (len, lines) = if horizontal { (w, h) } else { (h, w) };
    let index = |line: usize, pos: usize| -> usize {
        if horizontal {
            (line * w + pos) * channels
        } else {
            (pos * w + line) * channels
        }
    };

    for line in 0..lines {
        for ch in 0..color_channels {
            for pos in 0..len {
                let mut sum = 0u32;
                for k in 0..window {
                    let p = (pos + k).saturating_sub(radius).min(len - 1);
                    sum += src[index(line, p) + ch] as u32;
                }
                out[index(line, pos) + ch] = ((sum + window as u32 / 2) / window as u32) as u8;
            }
        }
    }

    out
}
