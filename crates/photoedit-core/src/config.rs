//! Editor configuration.
//!
//! Every field has a default, so a partial (or empty) serialized config is
//! valid.

use serde::{Deserialize, Serialize};

use crate::decode::ACCEPTED_EXTENSIONS;
use crate::params::{MAX_INTENSITY, MIN_INTENSITY, NEUTRAL_INTENSITY};
use crate::transform::InterpolationFilter;

/// Default JPEG quality for downloads.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Session-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// File extensions the upload accepts, compared case-insensitively.
    pub accepted_extensions: Vec<String>,
    /// Sampling for rotations that are not a multiple of 90 degrees.
    pub interpolation: InterpolationFilter,
    /// Intensity the slider starts at when an enhancement filter is picked.
    pub default_intensity: u8,
    /// JPEG quality used by [`crate::session::EditorSession::render_jpeg`].
    pub jpeg_quality: u8,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            accepted_extensions: ACCEPTED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            interpolation: InterpolationFilter::default(),
            default_intensity: NEUTRAL_INTENSITY,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl EditorConfig {
    /// Copy with numeric fields clamped into range and extensions normalized.
    pub fn normalized(mut self) -> Self {
        self.default_intensity = self.default_intensity.clamp(MIN_INTENSITY, MAX_INTENSITY);
        self.jpeg_quality = self.jpeg_quality.clamp(1, 100);
        for ext in &mut self.accepted_extensions {
            *ext = ext.trim_start_matches('.').to_ascii_lowercase();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.accepted_extensions, vec!["jpg", "png", "jpeg"]);
        assert_eq!(config.interpolation, InterpolationFilter::Nearest);
        assert_eq!(config.default_intensity, 50);
        assert_eq!(config.jpeg_quality, 90);
    }

    #[test]
    fn test_normalized() {
        let config = EditorConfig {
            accepted_extensions: vec![".PNG".into(), "Jpg".into()],
            default_intensity: 0,
            jpeg_quality: 200,
            ..EditorConfig::default()
        }
        .normalized();

        assert_eq!(config.accepted_extensions, vec!["png", "jpg"]);
        assert_eq!(config.default_intensity, 1);
        assert_eq!(config.jpeg_quality, 100);
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        use serde::de::value::{Error as DeError, MapDeserializer};

        let entries = vec![("jpeg_quality", 75u8)];
        let de: MapDeserializer<'_, _, DeError> = MapDeserializer::new(entries.into_iter());
        let config = EditorConfig::deserialize(de).unwrap();

        assert_eq!(config.jpeg_quality, 75);
        assert_eq!(config.default_intensity, 50);
        assert_eq!(config.accepted_extensions.len(), 3);
    }
}
