//! Upload decoding for the photo editor.
//!
//! This module provides functionality for:
//! - Validating an upload's file extension against the accepted list
//! - Decoding JPEG and PNG bytes into a [`DecodedImage`]
//!
//! # Architecture
//!
//! Decoding happens once per upload. The result is retained by the session
//! and every render pass starts from it, so nothing here is on the
//! per-interaction path. All operations are synchronous.
//!
//! # Examples
//!
//! ```ignore
//! use photoedit_core::decode::{decode_upload, ACCEPTED_EXTENSIONS};
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let image = decode_upload("photo.jpg", &bytes, &ACCEPTED_EXTENSIONS).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod types;
mod upload;

pub use types::{DecodeError, DecodedImage, PixelMode};
pub use upload::{
    decode_image, decode_upload, file_extension, is_accepted_file, ACCEPTED_EXTENSIONS,
};
