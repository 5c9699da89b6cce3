//! Vertical mirroring.

use crate::decode::DecodedImage;

/// Mirror an image top-to-bottom.
///
/// Row 0 of the output is the last row of the input. Dimensions and pixel
/// mode are unchanged.
pub fn flip_vertical(image: &DecodedImage) -> DecodedImage {
    let stride = image.stride();
    if stride == 0 {
        return image.clone();
    }

    let mut pixels = Vec::with_capacity(image.pixels.len());
    for row in image.pixels.chunks_exact(stride).rev() {
        pixels.extend_from_slice(row);
    }

    DecodedImage {
        width: image.width,
        height: image.height,
        mode: image.mode,
        pixels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::PixelMode;

    #[test]
    fn test_flip_swaps_rows() {
        // 2x2: red, green / blue, yellow
        let img = DecodedImage::new(
            2,
            2,
            PixelMode::Rgb,
            vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 0],
        );
        let flipped = flip_vertical(&img);

        assert_eq!(flipped.pixel(0, 0), &[0, 0, 255]); // Blue
        assert_eq!(flipped.pixel(1, 0), &[255, 255, 0]); // Yellow
        assert_eq!(flipped.pixel(0, 1), &[255, 0, 0]); // Red
        assert_eq!(flipped.pixel(1, 1), &[0, 255, 0]); // Green
    }

    #[test]
    fn test_flip_single_row_is_identity() {
        let img = DecodedImage::new(3, 1, PixelMode::Luma, vec![1, 2, 3]);
        assert_eq!(flip_vertical(&img), img);
    }

    #[test]
    fn test_flip_keeps_mode_and_dimensions() {
        let img = DecodedImage::solid(5, 7, PixelMode::Rgba, &[1, 2, 3, 4]);
        let flipped = flip_vertical(&img);
        assert_eq!((flipped.width, flipped.height), (5, 7));
        assert_eq!(flipped.mode, PixelMode::Rgba);
    }

    #[test]
    fn test_flip_empty_image() {
        let img = DecodedImage::new(0, 0, PixelMode::Rgb, vec![]);
        assert!(flip_vertical(&img).is_empty());
    }
}
