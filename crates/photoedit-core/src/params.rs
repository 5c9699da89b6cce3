//! Per-render parameters and their valid ranges.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::filters::FilterKind;

/// Largest accepted rotation, in degrees.
pub const MAX_ROTATION: u16 = 360;

/// Smallest accepted intensity.
pub const MIN_INTENSITY: u8 = 1;

/// Largest accepted intensity.
pub const MAX_INTENSITY: u8 = 100;

/// Intensity that leaves an enhancement filter's input unchanged.
pub const NEUTRAL_INTENSITY: u8 = 50;

/// Parameter values outside the ranges the editor accepts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
    #[error("Rotation {0} is outside 0..=360 degrees")]
    RotationOutOfRange(i64),

    #[error("Intensity {0} is outside 1..=100")]
    IntensityOutOfRange(i64),

    #[error("Unknown filter: {0}")]
    UnknownFilter(String),
}

/// Everything a render pass needs besides the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformParameters {
    /// Selected filter.
    pub filter: FilterKind,
    /// Mirror top-to-bottom before rotating.
    pub flip: bool,
    /// Counter-clockwise rotation in degrees (0 to 360).
    pub rotation_degrees: u16,
    /// Enhancement intensity (1 to 100); only read by enhancement filters.
    pub intensity: Option<u8>,
}

impl TransformParameters {
    /// Parameters that render the source unchanged, apart from `filter`.
    pub fn new(filter: FilterKind) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    pub fn with_flip(mut self, flip: bool) -> Self {
        self.flip = flip;
        self
    }

    pub fn with_rotation(mut self, degrees: u16) -> Self {
        self.rotation_degrees = degrees;
        self
    }

    pub fn with_intensity(mut self, intensity: u8) -> Self {
        self.intensity = Some(intensity);
        self
    }

    /// Check that rotation and intensity are within range.
    pub fn validate(&self) -> Result<(), ParameterError> {
        validate_rotation(self.rotation_degrees)?;
        if let Some(intensity) = self.intensity {
            validate_intensity(intensity)?;
        }
        Ok(())
    }

    /// Intensity passed to the filter: `None` unless the filter reads it,
    /// the neutral value if it does but none was set.
    pub fn effective_intensity(&self) -> Option<u8> {
        self.filter
            .takes_intensity()
            .then(|| self.intensity.unwrap_or(NEUTRAL_INTENSITY))
    }

    /// Whether rendering with these parameters returns the source unchanged.
    pub fn is_identity(&self) -> bool {
        !self.flip
            && self.rotation_degrees % MAX_ROTATION == 0
            && (self.filter == FilterKind::Original
                || self.effective_intensity() == Some(NEUTRAL_INTENSITY))
    }
}

/// Convert a rotation of any integer width, checking the 0..=360 range.
pub fn checked_rotation(degrees: i64) -> Result<u16, ParameterError> {
    u16::try_from(degrees)
        .ok()
        .filter(|&d| d <= MAX_ROTATION)
        .ok_or(ParameterError::RotationOutOfRange(degrees))
}

/// Convert an intensity of any integer width, checking the 1..=100 range.
pub fn checked_intensity(intensity: i64) -> Result<u8, ParameterError> {
    u8::try_from(intensity)
        .ok()
        .filter(|i| (MIN_INTENSITY..=MAX_INTENSITY).contains(i))
        .ok_or(ParameterError::IntensityOutOfRange(intensity))
}

pub(crate) fn validate_rotation(degrees: u16) -> Result<(), ParameterError> {
    checked_rotation(degrees.into()).map(|_| ())
}

pub(crate) fn validate_intensity(intensity: u8) -> Result<(), ParameterError> {
    checked_intensity(intensity.into()).map(|_| ())
}
