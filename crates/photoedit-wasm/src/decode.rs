//! Upload checks for the file picker.
//!
//! Lets the page reject a file by name before reading its bytes.
//!
//! # Example
//!
//! ```typescript
//! import { is_accepted_file, accepted_extensions } from '@photoedit/wasm';
//!
//! input.accept = accepted_extensions().map((e) => `.${e}`).join(',');
//! if (!is_accepted_file(file.name)) {
//!   showError(`Unsupported file: ${file.name}`);
//! }
//! ```

use photoedit_core::decode;
use wasm_bindgen::prelude::*;

/// Check if a file name has one of the default accepted extensions
/// (jpg, png, jpeg; any case).
#[wasm_bindgen]
pub fn is_accepted_file(file_name: &str) -> bool {
    decode::is_accepted_file(file_name)
}

/// Default accepted extensions, without the dot.
#[wasm_bindgen]
pub fn accepted_extensions() -> js_sys::Array {
    decode::ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| JsValue::from_str(ext))
        .collect()
}
