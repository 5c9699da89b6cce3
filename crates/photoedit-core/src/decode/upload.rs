//! Upload validation and decoding.
//!
//! Uploads are accepted by file extension first, then decoded with the
//! `image` crate's format sniffing. Nothing is transformed here: the decoded
//! image is handed to the session as-is.

use std::io::Cursor;
use std::path::Path;

use image::{ImageError, ImageReader};

use super::{DecodeError, DecodedImage};

/// Extensions accepted by the upload widget.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["jpg", "png", "jpeg"];

/// Decode image bytes of any supported format.
///
/// # Arguments
///
/// * `bytes` - Raw file bytes (JPEG or PNG)
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format cannot be recognized.
/// Returns `DecodeError::CorruptedFile` if the data is truncated or damaged.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let cursor = Cursor::new(bytes);
    let reader = ImageReader::new(cursor)
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let img = reader.decode().map_err(|e| match e {
        ImageError::Unsupported(_) => DecodeError::InvalidFormat,
        other => DecodeError::CorruptedFile(other.to_string()),
    })?;

    Ok(DecodedImage::from_dynamic(img))
}

/// Validate an upload's file name against `accepted` and decode its bytes.
///
/// Extension matching is case-insensitive. The bytes are only inspected
/// once the extension is accepted.
pub fn decode_upload<S: AsRef<str>>(
    file_name: &str,
    bytes: &[u8],
    accepted: &[S],
) -> Result<DecodedImage, DecodeError> {
    let ext = file_extension(file_name).unwrap_or_default();
    if !accepted.iter().any(|a| a.as_ref().eq_ignore_ascii_case(&ext)) {
        return Err(DecodeError::UnsupportedExtension(ext));
    }
    decode_image(bytes)
}

/// Lowercased extension of a file name, without the dot.
pub fn file_extension(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// Check a file name against the default accepted extensions.
pub fn is_accepted_file(file_name: &str) -> bool {
    file_extension(file_name).is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()))
}
