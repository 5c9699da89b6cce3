//! Median (rank) filter.

use crate::decode::DecodedImage;

/// Replace each color channel by the median of its `size` x `size`
/// neighbourhood. Edge pixels are extended; alpha is kept.
///
/// `size` should be odd; even sizes are rounded up.
pub fn median_filter(image: &DecodedImage, size: u32) -> DecodedImage {
    if size <= 1 || image.is_empty() {
        return image.clone();
    }

    let radius = (size / 2) as i64;
    let (w, h) = (image.width as i64, image.height as i64);
    let channels = image.channels();
    let color_channels = image.mode.color_channels();
    let stride = image.stride();
    let src = &image.pixels;
    let mut out = src.clone();

    let mut window = Vec::with_capacity(((2 * radius + 1) * (2 * radius + 1)) as usize);

    for y in 0..h {
        for x in 0..w {
            let base = y as usize * stride + x as usize * channels;
            for ch in 0..color_channels {
                window.clear();
                for dy in -radius..=radius {
                    let sy = (y + dy).clamp(0, h - 1) as usize;
                    for dx in -radius..=radius {
                        let sx = (x + dx).clamp(0, w - 1) as usize;
                        window.push(src[sy * stride + sx * channels + ch]);
                    }
                }
                let mid = window.len() / 2;
                let (_, median, _) = window.select_nth_unstable(mid);
                out[base + ch] = *median;
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
