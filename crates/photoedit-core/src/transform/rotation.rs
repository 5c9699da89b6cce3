//! Image rotation with canvas expansion.
//!
//! Exact multiples of 90 degrees are lossless pixel transposes. Any other
//! angle uses inverse mapping: for each pixel in the output image, we
//! calculate which source position lands on it and sample there.
//!
//! For a counter-clockwise rotation by θ with y pointing down, the inverse
//! transform relative to the image centers is:
//! ```text
//! src_x = dx * cos(θ) - dy * sin(θ) + src_cx
//! src_y = dx * sin(θ) + dy * cos(θ) + src_cy
//! ```
//!
//! Output pixels that map outside the source are zero (black, and
//! transparent for RGBA).

use serde::{Deserialize, Serialize};

use crate::decode::DecodedImage;

/// Interpolation filter for arbitrary-angle rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InterpolationFilter {
    /// Nearest neighbour: no new colors are introduced.
    #[default]
    Nearest,
    /// Bilinear interpolation: smoother edges.
    Bilinear,
}

/// Compute the dimensions of the bounding box for a rotated image.
///
/// When an image is rotated, the corners extend beyond the original bounds.
/// The canvas is the pixel-aligned hull of the rotated corners: with the
/// source placed at `[0, w] x [0, h]` and rotated about its center, each
/// side spans `ceil(max) - floor(min)`, so no corner is ever clipped.
///
/// # Arguments
///
/// * `width` - Original image width
/// * `height` - Original image height
/// * `angle_degrees` - Rotation angle in degrees (positive = counter-clockwise)
///
/// # Returns
///
/// Tuple of (new_width, new_height) for the rotated bounding box.
pub fn compute_rotated_bounds(width: u32, height: u32, angle_degrees: f64) -> (u32, u32) {
    if let Some(turns) = quarter_turns(angle_degrees) {
        return if turns % 2 == 1 {
            (height, width)
        } else {
            (width, height)
        };
    }

    let angle_rad = angle_degrees.to_radians();
    let cos = angle_rad.cos().abs();
    let sin = angle_rad.sin().abs();

    let w = width as f64;
    let h = height as f64;

    // Exact extent of the rotated rectangle:
    // extent_w = |w*cos| + |h*sin|
    // extent_h = |w*sin| + |h*cos|
    let new_w = pixel_hull(w / 2.0, w * cos + h * sin);
    let new_h = pixel_hull(h / 2.0, w * sin + h * cos);

    (new_w.max(1), new_h.max(1))
}

/// Whole pixels covering `[center - extent / 2, center + extent / 2]`.
fn pixel_hull(center: f64, extent: f64) -> u32 {
    // Drop float noise so an exact integer edge does not grow the canvas
    let snap = |v: f64| (v * 1e9).round() / 1e9;
    let lo = snap(center - extent / 2.0).floor();
    let hi = snap(center + extent / 2.0).ceil();
    (hi - lo) as u32
}

/// Apply a counter-clockwise rotation to an image.
///
/// The image is rotated around its center. The output canvas is expanded
/// to fit the entire rotated image (no clipping).
///
/// # Arguments
///
/// * `image` - Source image to rotate
/// * `angle_degrees` - Rotation angle in degrees (positive = counter-clockwise)
/// * `filter` - Sampling used for angles that are not a multiple of 90
///
/// # Returns
///
/// New `DecodedImage` with the rotated content and the same pixel mode.
pub fn apply_rotation(
    image: &DecodedImage,
    angle_degrees: f64,
    filter: InterpolationFilter,
) -> DecodedImage {
    if image.is_empty() {
        return image.clone();
    }

    if let Some(turns) = quarter_turns(angle_degrees) {
        return rotate_quarter_turns(image, turns);
    }

    let (src_w, src_h) = (image.width as f64, image.height as f64);
    let (dst_w, dst_h) = compute_rotated_bounds(image.width, image.height, angle_degrees);

    let angle_rad = angle_degrees.to_radians();
    let cos = angle_rad.cos();
    let sin = angle_rad.sin();

    // Center of source and destination images
    let src_cx = src_w / 2.0;
    let src_cy = src_h / 2.0;
    let dst_cx = dst_w as f64 / 2.0;
    let dst_cy = dst_h as f64 / 2.0;

    let channels = image.channels();
    let mut output = vec![0u8; dst_w as usize * dst_h as usize * channels];

    for dst_y in 0..dst_h {
        for dst_x in 0..dst_w {
            // Pixel center relative to the destination center
            let dx = dst_x as f64 + 0.5 - dst_cx;
            let dy = dst_y as f64 + 0.5 - dst_cy;

            let src_x = dx * cos - dy * sin + src_cx;
            let src_y = dx * sin + dy * cos + src_cy;

            let dst_idx = (dst_y as usize * dst_w as usize + dst_x as usize) * channels;
            let out = &mut output[dst_idx..dst_idx + channels];

            match filter {
                InterpolationFilter::Nearest => sample_nearest(image, src_x, src_y, out),
                InterpolationFilter::Bilinear => sample_bilinear(image, src_x, src_y, out),
            }
        }
    }

    DecodedImage {
        width: dst_w,
        height: dst_h,
        mode: image.mode,
        pixels: output,
    }
}

/// Number of counter-clockwise quarter turns if the angle is a multiple of 90.
fn quarter_turns(angle_degrees: f64) -> Option<u8> {
    let normalized = angle_degrees.rem_euclid(360.0);
    (0..=4u8)
        .find(|&k| (normalized - 90.0 * k as f64).abs() < 0.001)
        .map(|k| k % 4)
}

/// Lossless rotation by a whole number of quarter turns.
fn rotate_quarter_turns(image: &DecodedImage, turns: u8) -> DecodedImage {
    if turns == 0 {
        return image.clone();
    }

    let (w, h) = (image.width, image.height);
    let (dst_w, dst_h) = if turns % 2 == 1 { (h, w) } else { (w, h) };

    let mut output = Vec::with_capacity(image.pixels.len());
    for dy in 0..dst_h {
        for dx in 0..dst_w {
            let (sx, sy) = match turns {
                1 => (w - 1 - dy, dx),
                2 => (w - 1 - dx, h - 1 - dy),
                _ => (dy, h - 1 - dx),
            };
            output.extend_from_slice(image.pixel(sx, sy));
        }
    }

    DecodedImage {
        width: dst_w,
        height: dst_h,
        mode: image.mode,
        pixels: output,
    }
}

/// Sample the source pixel containing (x, y); leaves `out` zeroed outside.
fn sample_nearest(image: &DecodedImage, x: f64, y: f64, out: &mut [u8]) {
    if x < 0.0 || y < 0.0 || x >= image.width as f64 || y >= image.height as f64 {
        return;
    }
    out.copy_from_slice(image.pixel(x as u32, y as u32));
}

/// Sample a pixel using bilinear interpolation.
///
/// Bilinear interpolation considers the 4 nearest pixel centers and weights
/// their contribution based on distance. Neighbours past the edge are
/// clamped to the edge pixel.
fn sample_bilinear(image: &DecodedImage, x: f64, y: f64, out: &mut [u8]) {
    if x < 0.0 || y < 0.0 || x >= image.width as f64 || y >= image.height as f64 {
        return;
    }

    // Shift into pixel-center coordinates
    let fx = x - 0.5;
    let fy = y - 0.5;
    let x0f = fx.floor();
    let y0f = fy.floor();
    let tx = fx - x0f;
    let ty = fy - y0f;

    let max_x = image.width as i64 - 1;
    let max_y = image.height as i64 - 1;
    let x0 = (x0f as i64).clamp(0, max_x) as u32;
    let x1 = (x0f as i64 + 1).clamp(0, max_x) as u32;
    let y0 = (y0f as i64).clamp(0, max_y) as u32;
    let y1 = (y0f as i64 + 1).clamp(0, max_y) as u32;

    let p00 = image.pixel(x0, y0);
    let p10 = image.pixel(x1, y0);
    let p01 = image.pixel(x0, y1);
    let p11 = image.pixel(x1, y1);

    for (i, o) in out.iter_mut().enumerate() {
        let v = p00[i] as f64 * (1.0 - tx) * (1.0 - ty)
            + p10[i] as f64 * tx * (1.0 - ty)
            + p01[i] as f64 * (1.0 - tx) * ty
            + p11[i] as f64 * tx * ty;
        *o = v.clamp(0.0, 255.0).round() as u8;
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::decode::PixelMode;
    use proptest::prelude::*;

    fn patterned_image(width: u32, height: u32) -> DecodedImage {
        let pixels = (0..(width * height * 3) as usize)
            .map(|i| ((i * 37) % 256) as u8)
            .collect();
        DecodedImage::new(width, height, PixelMode::Rgb, pixels)
    }

    proptest! {
        /// Property: A quarter-turn rotation followed by its complement is exact.
        #[test]
        fn prop_quarter_turn_round_trip(
            (width, height) in (1u32..=40, 1u32..=40),
            turns in 0u32..=4,
        ) {
            let img = patterned_image(width, height);
            let r = (turns * 90) as f64;
            let back_angle = (360.0 - r).rem_euclid(360.0);

            let rotated = apply_rotation(&img, r, InterpolationFilter::Nearest);
            let restored = apply_rotation(&rotated, back_angle, InterpolationFilter::Nearest);
            prop_assert_eq!(restored, img);
        }

        /// Property: Output buffer always matches output dimensions.
        #[test]
        fn prop_pixel_data_matches_dimensions(
            (width, height) in (1u32..=40, 1u32..=40),
            angle in 0u16..=360,
            bilinear in any::<bool>(),
        ) {
            let img = patterned_image(width, height);
            let filter = if bilinear {
                InterpolationFilter::Bilinear
            } else {
                InterpolationFilter::Nearest
            };
            let result = apply_rotation(&img, angle as f64, filter);

            prop_assert!(result.width >= 1 && result.height >= 1);
            prop_assert_eq!(
                result.pixels.len(),
                (result.width * result.height * 3) as usize
            );
        }
    }
}
