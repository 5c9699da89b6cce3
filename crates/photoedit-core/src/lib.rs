//! Photoedit Core - Image processing library
//!
//! This crate provides the core functionality of the photo editor: upload
//! decoding, the flip/rotate/filter render pass, the filter catalog, and
//! PNG/JPEG encoding for display and download.
//!
//! The usual entry point is [`EditorSession`], which holds the uploaded
//! image and the current controls and renders on demand.

pub mod config;
pub mod decode;
pub mod encode;
pub mod filters;
pub mod luminance;
pub mod params;
pub mod pipeline;
pub mod session;
pub mod transform;

pub use config::EditorConfig;
pub use decode::{DecodeError, DecodedImage, PixelMode};
pub use encode::{encode_jpeg, encode_png, EncodeError};
pub use filters::FilterKind;
pub use params::{ParameterError, TransformParameters};
pub use pipeline::{render, render_with};
pub use session::{EditorError, EditorSession};
pub use transform::{apply_rotation, compute_rotated_bounds, flip_vertical, InterpolationFilter};
