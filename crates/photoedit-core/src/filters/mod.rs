//! The filter catalog.
//!
//! Every entry of the editor's filter dropdown is a [`FilterKind`] variant,
//! and every variant maps to exactly one pure function from image (plus an
//! optional intensity) to a new image. The mapping lives in
//! [`FilterKind::apply`] as an exhaustive match.
//!
//! ## Filter families
//! - Fixed kernels: Blur, Sharpen, Edge Detection, Emboss, Motion Blur
//! - Color mapping: Grayscale, Sepia, Invert Colors
//! - Enhancement (intensity slider): Brightness, Contrast, Saturation
//! - Neighbourhood: Gaussian Blur, Box Blur, Median Filter
//!
//! Unless noted otherwise, filters touch color channels only and keep an
//! RGBA alpha channel as-is.

pub mod blur;
pub mod color;
pub mod enhance;
pub mod kernel;
pub mod median;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::decode::DecodedImage;
use crate::params::{ParameterError, NEUTRAL_INTENSITY};

/// Radius used by the Gaussian and box blur filters.
pub const BLUR_RADIUS: u32 = 2;

/// Window size of the median filter.
pub const MEDIAN_SIZE: u32 = 3;

/// One entry of the filter dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FilterKind {
    #[default]
    Original,
    Blur,
    Sharpen,
    Grayscale,
    Sepia,
    #[serde(rename = "Edge Detection")]
    EdgeDetection,
    Emboss,
    #[serde(rename = "Invert Colors")]
    InvertColors,
    #[serde(rename = "Brightness Adjustment")]
    BrightnessAdjustment,
    #[serde(rename = "Contrast Adjustment")]
    ContrastAdjustment,
    #[serde(rename = "Saturation Adjustment")]
    SaturationAdjustment,
    #[serde(rename = "Gaussian Blur")]
    GaussianBlur,
    #[serde(rename = "Box Blur")]
    BoxBlur,
    #[serde(rename = "Motion Blur")]
    MotionBlur,
    #[serde(rename = "Median Filter")]
    MedianFilter,
}

impl FilterKind {
    /// All filters in dropdown order.
    pub const ALL: [FilterKind; 15] = [
        FilterKind::Original,
        FilterKind::Blur,
        FilterKind::Sharpen,
        FilterKind::Grayscale,
        FilterKind::Sepia,
        FilterKind::EdgeDetection,
        FilterKind::Emboss,
        FilterKind::InvertColors,
        FilterKind::BrightnessAdjustment,
        FilterKind::ContrastAdjustment,
        FilterKind::SaturationAdjustment,
        FilterKind::GaussianBlur,
        FilterKind::BoxBlur,
        FilterKind::MotionBlur,
        FilterKind::MedianFilter,
    ];

    /// Display name, as shown in the dropdown.
    pub fn name(self) -> &'static str {
        match self {
            FilterKind::Original => "Original",
            FilterKind::Blur => "Blur",
            FilterKind::Sharpen => "Sharpen",
            FilterKind::Grayscale => "Grayscale",
            FilterKind::Sepia => "Sepia",
            FilterKind::EdgeDetection => "Edge Detection",
            FilterKind::Emboss => "Emboss",
            FilterKind::InvertColors => "Invert Colors",
            FilterKind::BrightnessAdjustment => "Brightness Adjustment",
            FilterKind::ContrastAdjustment => "Contrast Adjustment",
            FilterKind::SaturationAdjustment => "Saturation Adjustment",
            FilterKind::GaussianBlur => "Gaussian Blur",
            FilterKind::BoxBlur => "Box Blur",
            FilterKind::MotionBlur => "Motion Blur",
            FilterKind::MedianFilter => "Median Filter",
        }
    }

    /// Caption shown under the rendered image.
    pub fn caption(self) -> &'static str {
        match self {
            FilterKind::Original => "Original Image",
            FilterKind::Blur => "Blurred Image",
            FilterKind::Sharpen => "Sharpened Image",
            FilterKind::Grayscale => "Grayscale Image",
            FilterKind::Sepia => "Sepia Image",
            FilterKind::EdgeDetection => "Edge Detection",
            FilterKind::Emboss => "Embossed Image",
            FilterKind::InvertColors => "Inverted Colors",
            FilterKind::BrightnessAdjustment => "Brightness Adjusted Image",
            FilterKind::ContrastAdjustment => "Contrast Adjusted Image",
            FilterKind::SaturationAdjustment => "Saturation Adjusted Image",
            FilterKind::GaussianBlur => "Gaussian Blurred Image",
            FilterKind::BoxBlur => "Box Blurred Image",
            FilterKind::MotionBlur => "Motion Blurred Image",
            FilterKind::MedianFilter => "Median Filtered Image",
        }
    }

    /// Whether the intensity slider applies to this filter.
    pub fn takes_intensity(self) -> bool {
        matches!(
            self,
            FilterKind::BrightnessAdjustment
                | FilterKind::ContrastAdjustment
                | FilterKind::SaturationAdjustment
        )
    }

    /// Look a filter up by display name, falling back to `Original`.
    pub fn from_name_or_original(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// Apply this filter to `image`.
    ///
    /// `intensity` is only read by the enhancement filters; when absent
    /// they use the neutral value and return the image unchanged.
    pub fn apply(self, image: &DecodedImage, intensity: Option<u8>) -> DecodedImage {
        let factor = || enhance::intensity_factor(intensity.unwrap_or(NEUTRAL_INTENSITY));

        match self {
            FilterKind::Original => image.clone(),
            FilterKind::Blur => kernel::convolve(image, &kernel::BLUR),
            FilterKind::Sharpen => kernel::convolve(image, &kernel::SHARPEN),
            FilterKind::Grayscale => color::grayscale(image),
            FilterKind::Sepia => color::sepia(image),
            FilterKind::EdgeDetection => kernel::convolve(image, &kernel::FIND_EDGES),
            FilterKind::Emboss => kernel::convolve(image, &kernel::EMBOSS),
            FilterKind::InvertColors => color::invert(image),
            FilterKind::BrightnessAdjustment => enhance::adjust_brightness(image, factor()),
            FilterKind::ContrastAdjustment => enhance::adjust_contrast(image, factor()),
            FilterKind::SaturationAdjustment => enhance::adjust_saturation(image, factor()),
            FilterKind::GaussianBlur => blur::gaussian_blur(image, BLUR_RADIUS as f32),
            FilterKind::BoxBlur => blur::box_blur(image, BLUR_RADIUS),
            FilterKind::MotionBlur => kernel::convolve(image, &kernel::MOTION_BLUR),
            FilterKind::MedianFilter => median::median_filter(image, MEDIAN_SIZE),
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterKind {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ParameterError::UnknownFilter(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::PixelMode;
    use std::collections::HashSet;

    fn solid_red() -> DecodedImage {
        DecodedImage::solid(100, 100, PixelMode::Rgb, &[255, 0, 0])
    }

    #[test]
    fn test_catalog_has_fifteen_unique_entries() {
        let names: HashSet<_> = FilterKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), 15);
        assert_eq!(FilterKind::ALL[0], FilterKind::Original);
        assert_eq!(FilterKind::ALL[14], FilterKind::MedianFilter);
    }

    #[test]
    fn test_name_round_trip() {
        for kind in FilterKind::ALL {
            assert_eq!(kind.name().parse::<FilterKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn test_unknown_name_is_error() {
        let err = "Posterize".parse::<FilterKind>().unwrap_err();
        assert!(matches!(err, ParameterError::UnknownFilter(ref n) if n == "Posterize"));
    }

    #[test]
    fn test_name_lookup_is_exact() {
        assert!("grayscale".parse::<FilterKind>().is_err());
        assert!(" Blur".parse::<FilterKind>().is_err());
    }

    #[test]
    fn test_unknown_name_falls_back_to_original() {
        assert_eq!(FilterKind::from_name_or_original("???"), FilterKind::Original);
        assert_eq!(FilterKind::from_name_or_original("Sepia"), FilterKind::Sepia);
    }

    #[test]
    fn test_takes_intensity() {
        let with: Vec<_> = FilterKind::ALL
            .into_iter()
            .filter(|k| k.takes_intensity())
            .collect();
        assert_eq!(
            with,
            vec![
                FilterKind::BrightnessAdjustment,
                FilterKind::ContrastAdjustment,
                FilterKind::SaturationAdjustment,
            ]
        );
    }

    #[test]
    fn test_captions() {
        assert_eq!(FilterKind::Original.caption(), "Original Image");
        assert_eq!(FilterKind::InvertColors.caption(), "Inverted Colors");
        assert_eq!(FilterKind::MedianFilter.caption(), "Median Filtered Image");
    }

    #[test]
    fn test_original_is_identity() {
        let img = solid_red();
        assert_eq!(FilterKind::Original.apply(&img, None), img);
    }

    #[test]
    fn test_red_grayscale() {
        let out = FilterKind::Grayscale.apply(&solid_red(), None);
        assert_eq!(out.mode, PixelMode::Luma);
        assert_eq!((out.width, out.height), (100, 100));
        assert!(out.pixels.iter().all(|&v| v == 76));
    }

    #[test]
    fn test_red_invert_is_cyan() {
        let out = FilterKind::InvertColors.apply(&solid_red(), None);
        assert_eq!(out, DecodedImage::solid(100, 100, PixelMode::Rgb, &[0, 255, 255]));
    }

    #[test]
    fn test_red_sepia() {
        let out = FilterKind::Sepia.apply(&solid_red(), None);
        assert_eq!(out.mode, PixelMode::Rgb);
        for px in out.pixels.chunks_exact(3) {
            assert_eq!(px, [223, 202, 174]);
            assert!(px[0] >= 210 && px[1] >= 180 && px[2] >= 140);
        }
    }

    #[test]
    fn test_enhancements_without_intensity_are_neutral() {
        let img = DecodedImage::new(2, 1, PixelMode::Rgb, vec![10, 100, 200, 250, 5, 60]);
        for kind in FilterKind::ALL.into_iter().filter(|k| k.takes_intensity()) {
            assert_eq!(kind.apply(&img, None), img, "{}", kind);
            assert_eq!(kind.apply(&img, Some(50)), img, "{}", kind);
        }
    }

    #[test]
    fn test_non_enhancements_ignore_intensity() {
        let img = DecodedImage::new(2, 1, PixelMode::Rgb, vec![10, 100, 200, 250, 5, 60]);
        for kind in FilterKind::ALL.into_iter().filter(|k| !k.takes_intensity()) {
            assert_eq!(kind.apply(&img, Some(1)), kind.apply(&img, Some(100)), "{}", kind);
        }
    }

    #[test]
    fn test_every_filter_keeps_dimensions() {
        let img = DecodedImage::solid(12, 9, PixelMode::Rgba, &[30, 60, 90, 255]);
        for kind in FilterKind::ALL {
            let out = kind.apply(&img, Some(75));
            assert_eq!((out.width, out.height), (12, 9), "{}", kind);
            assert_eq!(
                out.byte_size(),
                out.pixel_count() as usize * out.channels(),
                "{}",
                kind
            );
        }
    }

    #[test]
    fn test_serde_uses_display_names() {
        use serde::de::value::{Error as DeError, StrDeserializer};
        use serde::de::IntoDeserializer;

        let de: StrDeserializer<'_, DeError> = "Edge Detection".into_deserializer();
        assert_eq!(FilterKind::deserialize(de).unwrap(), FilterKind::EdgeDetection);
    }
}
