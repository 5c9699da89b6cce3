//! The render pass: flip, rotate, filter.
//!
//! Rendering is a pure function of the source image and the parameters.
//! Every step returns a new image; the source is never modified.

use crate::decode::DecodedImage;
use crate::params::TransformParameters;
use crate::transform::{apply_rotation, flip_vertical, InterpolationFilter};

/// Render `source` with the default (nearest neighbour) rotation sampling.
///
/// Parameters are assumed to be in range; see
/// [`TransformParameters::validate`].
pub fn render(source: &DecodedImage, params: &TransformParameters) -> DecodedImage {
    render_with(source, params, InterpolationFilter::default())
}

/// Render `source`, sampling arbitrary-angle rotations with `interpolation`.
///
/// Steps, each feeding the next:
/// 1. Vertical flip if `params.flip`
/// 2. Counter-clockwise rotation by `params.rotation_degrees`, canvas expanded
/// 3. `params.filter`, with the intensity if the filter reads one
pub fn render_with(
    source: &DecodedImage,
    params: &TransformParameters,
    interpolation: InterpolationFilter,
) -> DecodedImage {
    let _span = tracing::debug_span!(
        "render",
        filter = %params.filter,
        flip = params.flip,
        rotation = params.rotation_degrees,
    )
    .entered();

    if params.is_identity() {
        tracing::debug!("parameters leave the source unchanged");
        return source.clone();
    }

    let flipped;
    let current = if params.flip {
        flipped = flip_vertical(source);
        &flipped
    } else {
        source
    };

    let rotated = apply_rotation(current, params.rotation_degrees as f64, interpolation);
    let output = params.filter.apply(&rotated, params.effective_intensity());

    tracing::debug!(
        src_width = source.width,
        src_height = source.height,
        width = output.width,
        height = output.height,
        mode = ?output.mode,
        "rendered"
    );

    output
}
