//! Fixed-kernel convolution filters.
//!
//! Kernels are written row-major, top row first, and are flipped vertically
//! when applied: the first row weights the pixel *below* the target. Each
//! weighted sum is divided by the kernel's divisor, the offset is added, and
//! the result is rounded and clamped to 0..=255.
//!
//! Pixels closer to the edge than the kernel radius are copied unchanged.

use crate::decode::DecodedImage;

/// A square convolution kernel with a divisor and an offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel {
    /// Side length (3 or 5).
    pub size: usize,
    /// `size * size` weights, row-major.
    pub weights: &'static [f32],
    /// Each weighted sum is divided by this.
    pub divisor: f32,
    /// Added after division.
    pub offset: f32,
}

/// 5x5 ring of ones around a zero interior.
pub const BLUR: Kernel = Kernel {
    size: 5,
    #[rustfmt::skip]
    weights: &[
        1.0, 1.0, 1.0, 1.0, 1.0,
        1.0, 0.0, 0.0, 0.0, 1.0,
        1.0, 0.0, 0.0, 0.0, 1.0,
        1.0, 0.0, 0.0, 0.0, 1.0,
        1.0, 1.0, 1.0, 1.0, 1.0,
    ],
    divisor: 16.0,
    offset: 0.0,
};

pub const SHARPEN: Kernel = Kernel {
    size: 3,
    #[rustfmt::skip]
    weights: &[
        -2.0, -2.0, -2.0,
        -2.0, 32.0, -2.0,
        -2.0, -2.0, -2.0,
    ],
    divisor: 16.0,
    offset: 0.0,
};

pub const FIND_EDGES: Kernel = Kernel {
    size: 3,
    #[rustfmt::skip]
    weights: &[
        -1.0, -1.0, -1.0,
        -1.0,  8.0, -1.0,
        -1.0, -1.0, -1.0,
    ],
    divisor: 1.0,
    offset: 0.0,
};

pub const EMBOSS: Kernel = Kernel {
    size: 3,
    #[rustfmt::skip]
    weights: &[
        -1.0, 0.0, 0.0,
         0.0, 1.0, 0.0,
         0.0, 0.0, 0.0,
    ],
    divisor: 1.0,
    offset: 128.0,
};

/// Horizontal difference kernel. Not normalized.
pub const MOTION_BLUR: Kernel = Kernel {
    size: 3,
    #[rustfmt::skip]
    weights: &[
        1.0, 0.0, -1.0,
        1.0, 0.0, -1.0,
        1.0, 0.0, -1.0,
    ],
    divisor: 1.0,
    offset: 0.0,
};

/// Convolve the color channels of `image` with `kernel`.
///
/// Alpha, if present, is copied through. Images smaller than the kernel
/// are returned unchanged.
pub fn convolve(image: &DecodedImage, kernel: &Kernel) -> DecodedImage {
    debug_assert_eq!(kernel.weights.len(), kernel.size * kernel.size);

    let (w, h) = (image.width as usize, image.height as usize);
    let size = kernel.size;
    if w < size || h < size {
        return image.clone();
    }

    let half = size / 2;
    let channels = image.channels();
    let color_channels = image.mode.color_channels();
    let stride = image.stride();
    let src = &image.pixels;
    let mut out = src.clone();

    for y in half..h - half {
        for x in half..w - half {
            let base = y * stride + x * channels;
            for ch in 0..color_channels {
                let mut sum = 0.0f32;
                for ky in 0..size {
                    let sy = y + half - ky;
                    let row = sy * stride;
                    for kx in 0..size {
                        let sx = x + kx - half;
                        let weight = kernel.weights[ky * size + kx];
                        sum += weight * src[row + sx * channels + ch] as f32;
                    }
                }
                let v = sum / kernel.divisor + kernel.offset;
                out[base + ch] = v.round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    DecodedImage {
        width: image.width,
        height: image.height,
        mode: image.mode,
        pixels: out,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::PixelMode;

    fn solid(v: u8) -> DecodedImage {
        DecodedImage::solid(8, 8, PixelMode::Rgb, &[v, v, v])
    }

    /// 5x5 single-channel image with one bright pixel in the middle.
    fn impulse() -> DecodedImage {
        let mut pixels = vec![0u8; 25];
        pixels[12] = 100;
        DecodedImage::new(5, 5, PixelMode::Luma, pixels)
    }

    #[test]
    fn test_weights_match_size() {
        for k in [BLUR, SHARPEN, FIND_EDGES, EMBOSS, MOTION_BLUR] {
            assert_eq!(k.weights.len(), k.size * k.size);
        }
    }

    #[test]
    fn test_blur_and_sharpen_preserve_uniform() {
        let img = solid(90);
        assert_eq!(convolve(&img, &BLUR), img);
        assert_eq!(convolve(&img, &SHARPEN), img);
    }

    #[test]
    fn test_edges_of_uniform_are_black_inside() {
        let out = convolve(&solid(90), &FIND_EDGES);
        assert_eq!(out.pixel(3, 3), &[0, 0, 0]);
        // Border is copied
        assert_eq!(out.pixel(0, 0), &[90, 90, 90]);
    }

    #[test]
    fn test_emboss_of_uniform_is_mid_gray() {
        let out = convolve(&solid(200), &EMBOSS);
        assert_eq!(out.pixel(4, 4), &[128, 128, 128]);
    }

    #[test]
    fn test_motion_blur_of_uniform_cancels() {
        let out = convolve(&solid(200), &MOTION_BLUR);
        assert_eq!(out.pixel(4, 4), &[0, 0, 0]);
    }

    #[test]
    fn test_motion_blur_responds_to_horizontal_ramp() {
        // Each row contributes left minus right.
        let mut pixels = Vec::new();
        for _y in 0..3 {
            pixels.extend_from_slice(&[100, 50, 0]);
        }
        let img = DecodedImage::new(3, 3, PixelMode::Luma, pixels);
        let out = convolve(&img, &MOTION_BLUR);
        // 3 * (100 - 0) = 300, clamped
        assert_eq!(out.pixel(1, 1), &[255]);
    }

    #[test]
    fn test_emboss_kernel_is_flipped_vertically() {
        // The -1 weight in the kernel's top row reads the pixel below.
        let mut pixels = vec![0u8; 9];
        pixels[7] = 50; // (1, 2): directly below the center
        let img = DecodedImage::new(3, 3, PixelMode::Luma, pixels);
        let out = convolve(&img, &EMBOSS);
        assert_eq!(out.pixel(1, 1), &[128]);

        let mut pixels = vec![0u8; 9];
        pixels[6] = 50; // (0, 2): below-left
        let img = DecodedImage::new(3, 3, PixelMode::Luma, pixels);
        let out = convolve(&img, &EMBOSS);
        assert_eq!(out.pixel(1, 1), &[78]);
    }

    #[test]
    fn test_sharpen_impulse() {
        let out = convolve(&impulse(), &SHARPEN);
        // Center: 32 * 100 / 16
        assert_eq!(out.pixel(2, 2), &[200]);
        // Neighbour: -2 * 100 / 16 = -12.5, clamped to 0
        assert_eq!(out.pixel(1, 2), &[0]);
    }

    #[test]
    fn test_blur_ignores_center_of_ring() {
        // The 5x5 ring has a zero interior, so an isolated center pixel
        // contributes nothing to itself.
        let out = convolve(&impulse(), &BLUR);
        assert_eq!(out.pixel(2, 2), &[0]);
    }

    #[test]
    fn test_small_image_unchanged() {
        let img = DecodedImage::solid(2, 2, PixelMode::Rgb, &[1, 2, 3]);
        assert_eq!(convolve(&img, &SHARPEN), img);

        let img = DecodedImage::solid(4, 9, PixelMode::Rgb, &[1, 2, 3]);
        assert_eq!(convolve(&img, &BLUR), img);
    }

    #[test]
    fn test_alpha_is_preserved() {
        let img = DecodedImage::solid(6, 6, PixelMode::Rgba, &[90, 90, 90, 77]);
        let out = convolve(&img, &FIND_EDGES);
        assert_eq!(out.pixel(2, 2), &[0, 0, 0, 77]);
    }
}
