//! Photoedit WASM - WebAssembly bindings for the photo editor
//!
//! This crate exposes the photoedit-core functionality to JavaScript/TypeScript
//! so the editor page can run entirely in the browser.
//!
//! # Module Structure
//!
//! - `session` - Stateful editor session (upload, controls, render)
//! - `filters` - Filter catalog and a stateless one-shot transform
//! - `types` - WASM-compatible wrapper types for image data
//! - `decode` - File-name checks for the upload picker
//! - `encode` - PNG and JPEG encoding for downloads
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsEditorSession, filter_names } from '@photoedit/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! for (const name of filter_names()) select.add(new Option(name));
//!
//! const session = new JsEditorSession();
//! session.upload(file.name, new Uint8Array(await file.arrayBuffer()));
//! const image = session.render();
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod filters;
mod session;
mod types;

// Re-export public types
pub use decode::{accepted_extensions, is_accepted_file};
pub use encode::{encode_jpeg, encode_png};
pub use filters::{apply_transform, filter_caption, filter_names, filter_takes_intensity};
pub use session::JsEditorSession;
pub use types::JsRenderedImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
