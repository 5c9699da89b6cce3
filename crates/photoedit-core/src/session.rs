//! Editor session state.
//!
//! An [`EditorSession`] holds the uploaded source image and the current
//! control values. Every control change is validated on entry, so a render
//! never sees out-of-range parameters. Rendering always starts from the
//! source; results are not cached.

use thiserror::Error;

use crate::config::EditorConfig;
use crate::decode::{decode_upload, DecodeError, DecodedImage};
use crate::encode::{encode_jpeg, encode_png, EncodeError};
use crate::filters::FilterKind;
use crate::params::{validate_intensity, validate_rotation, ParameterError, TransformParameters};
use crate::pipeline::render_with;

/// Errors surfaced by session operations.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("No image uploaded")]
    NoImage,

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Upload plus control state for one editing session.
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    config: EditorConfig,
    source: Option<DecodedImage>,
    params: TransformParameters,
}

impl EditorSession {
    /// Session with the default configuration and no image.
    pub fn new() -> Self {
        Self::default()
    }

    /// Session with a custom configuration. The config is normalized first.
    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            config: config.normalized(),
            ..Self::default()
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Decode an upload and make it the source image.
    ///
    /// On failure the previous source (if any) is kept. Control values are
    /// never reset by an upload.
    pub fn upload(&mut self, file_name: &str, bytes: &[u8]) -> Result<(), EditorError> {
        match decode_upload(file_name, bytes, &self.config.accepted_extensions) {
            Ok(image) => {
                tracing::info!(
                    file_name,
                    width = image.width,
                    height = image.height,
                    mode = ?image.mode,
                    "image uploaded"
                );
                self.source = Some(image);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(file_name, error = %e, "upload rejected");
                Err(e.into())
            }
        }
    }

    /// Drop the source image.
    pub fn clear(&mut self) {
        self.source = None;
    }

    pub fn has_image(&self) -> bool {
        self.source.is_some()
    }

    pub fn source(&self) -> Option<&DecodedImage> {
        self.source.as_ref()
    }

    pub fn params(&self) -> &TransformParameters {
        &self.params
    }

    /// Select a filter.
    ///
    /// Switching to an enhancement filter keeps the current intensity if one
    /// is set, otherwise starts from the configured default. Switching to any
    /// other filter hides the slider and forgets its value.
    pub fn set_filter(&mut self, filter: FilterKind) {
        self.params.filter = filter;
        self.params.intensity = if filter.takes_intensity() {
            Some(self.params.intensity.unwrap_or(self.config.default_intensity))
        } else {
            None
        };
        tracing::debug!(%filter, "filter selected");
    }

    /// Select a filter by its display name.
    pub fn set_filter_by_name(&mut self, name: &str) -> Result<(), EditorError> {
        let filter = name.parse::<FilterKind>()?;
        self.set_filter(filter);
        Ok(())
    }

    pub fn set_flip(&mut self, flip: bool) {
        self.params.flip = flip;
    }

    /// Set the counter-clockwise rotation, 0 to 360 degrees.
    pub fn set_rotation(&mut self, degrees: u16) -> Result<(), EditorError> {
        validate_rotation(degrees)?;
        self.params.rotation_degrees = degrees;
        Ok(())
    }

    /// Set the enhancement intensity, 1 to 100.
    ///
    /// The value is stored even when the current filter ignores it.
    pub fn set_intensity(&mut self, intensity: u8) -> Result<(), EditorError> {
        validate_intensity(intensity)?;
        self.params.intensity = Some(intensity);
        Ok(())
    }

    /// Replace all control values at once.
    pub fn set_params(&mut self, params: TransformParameters) -> Result<(), EditorError> {
        params.validate()?;
        self.params = params;
        Ok(())
    }

    /// Whether the intensity slider should be shown.
    pub fn intensity_visible(&self) -> bool {
        self.params.filter.takes_intensity()
    }

    /// Caption for the rendered image.
    pub fn caption(&self) -> &'static str {
        self.params.filter.caption()
    }

    /// Render the source with the current controls.
    pub fn render(&self) -> Result<DecodedImage, EditorError> {
        let source = self.source.as_ref().ok_or(EditorError::NoImage)?;
        Ok(render_with(source, &self.params, self.config.interpolation))
    }

    /// Render and encode as PNG.
    pub fn render_png(&self) -> Result<Vec<u8>, EditorError> {
        let image = self.render()?;
        Ok(encode_png(&image)?)
    }

    /// Render and encode as JPEG at the configured quality.
    pub fn render_jpeg(&self) -> Result<Vec<u8>, EditorError> {
        let image = self.render()?;
        Ok(encode_jpeg(&image, self.config.jpeg_quality)?)
    }
}
