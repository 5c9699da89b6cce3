//! Editor session WASM bindings.
//!
//! This module wraps [`photoedit_core::EditorSession`] for JavaScript. The
//! page keeps one session alive, forwards each control change to it, and
//! calls `render()` whenever a control changes.
//!
//! # Example
//!
//! ```typescript
//! import { JsEditorSession } from '@photoedit/wasm';
//!
//! const session = new JsEditorSession();
//! session.upload(file.name, new Uint8Array(await file.arrayBuffer()));
//! session.set_filter('Sepia');
//! session.set_rotation(45);
//!
//! const image = session.render();
//! const data = new ImageData(new Uint8ClampedArray(image.to_rgba()), image.width, image.height);
//! ctx.putImageData(data, 0, 0);
//! caption.textContent = session.caption();
//! ```

use crate::types::{interpolation_from_u8, JsRenderedImage};
use photoedit_core::params::{checked_intensity, checked_rotation};
use photoedit_core::{EditorConfig, EditorError, EditorSession};
use wasm_bindgen::prelude::*;

/// Editor session wrapper for JavaScript
#[wasm_bindgen]
pub struct JsEditorSession {
    inner: EditorSession,
}

#[wasm_bindgen]
impl JsEditorSession {
    /// Create a session with the default configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: EditorSession::new(),
        }
    }

    /// Create a session from a (possibly partial) config object.
    ///
    /// ```typescript
    /// const session = JsEditorSession.with_config({ jpeg_quality: 80 });
    /// ```
    pub fn with_config(config: JsValue) -> Result<JsEditorSession, JsValue> {
        let config: EditorConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;
        Ok(Self {
            inner: EditorSession::with_config(config),
        })
    }

    /// Decode an uploaded file and make it the source image.
    ///
    /// On error the previous image stays loaded.
    pub fn upload(&mut self, file_name: &str, bytes: &[u8]) -> Result<(), JsValue> {
        self.inner.upload(file_name, bytes).map_err(to_js_error)
    }

    /// Drop the loaded image
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Whether an image is loaded
    #[wasm_bindgen(getter)]
    pub fn has_image(&self) -> bool {
        self.inner.has_image()
    }

    /// Select a filter by display name, e.g. "Gaussian Blur"
    pub fn set_filter(&mut self, name: &str) -> Result<(), JsValue> {
        self.inner.set_filter_by_name(name).map_err(to_js_error)
    }

    /// Currently selected filter's display name
    #[wasm_bindgen(getter)]
    pub fn filter(&self) -> String {
        self.inner.params().filter.name().to_string()
    }

    /// Set the vertical flip checkbox
    pub fn set_flip(&mut self, flip: bool) {
        self.inner.set_flip(flip);
    }

    /// Set the rotation slider (0 to 360 degrees, counter-clockwise).
    ///
    /// Takes a JS number so out-of-range values are rejected rather than
    /// wrapped to the integer width.
    pub fn set_rotation(&mut self, degrees: f64) -> Result<(), JsValue> {
        let degrees = whole_number(degrees).ok_or_else(|| not_whole(degrees))?;
        checked_rotation(degrees)
            .map_err(EditorError::from)
            .and_then(|d| self.inner.set_rotation(d))
            .map_err(to_js_error)
    }

    /// Set the intensity slider (1 to 100).
    pub fn set_intensity(&mut self, intensity: f64) -> Result<(), JsValue> {
        let intensity = whole_number(intensity).ok_or_else(|| not_whole(intensity))?;
        checked_intensity(intensity)
            .map_err(EditorError::from)
            .and_then(|i| self.inner.set_intensity(i))
            .map_err(to_js_error)
    }

    /// Current intensity, or undefined when the slider is hidden
    #[wasm_bindgen(getter)]
    pub fn intensity(&self) -> Option<u8> {
        self.inner.params().intensity
    }

    /// Whether the intensity slider should be shown
    pub fn intensity_visible(&self) -> bool {
        self.inner.intensity_visible()
    }

    /// Caption for the rendered image
    pub fn caption(&self) -> String {
        self.inner.caption().to_string()
    }

    /// Current control values as a plain object
    pub fn params(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.params())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Render the loaded image with the current controls
    pub fn render(&self) -> Result<JsRenderedImage, JsValue> {
        self.inner
            .render()
            .map(JsRenderedImage::from_decoded)
            .map_err(to_js_error)
    }

    /// Render and encode as PNG for download
    pub fn render_png(&self) -> Result<Vec<u8>, JsValue> {
        self.inner.render_png().map_err(to_js_error)
    }

    /// Render and encode as JPEG at the configured quality
    pub fn render_jpeg(&self) -> Result<Vec<u8>, JsValue> {
        self.inner.render_jpeg().map_err(to_js_error)
    }

    /// Render with an explicit rotation sampling (0 = nearest, 1 = bilinear)
    pub fn render_with_interpolation(&self, interpolation: u8) -> Result<JsRenderedImage, JsValue> {
        let source = self
            .inner
            .source()
            .ok_or_else(|| to_js_error(EditorError::NoImage))?;
        let output = photoedit_core::render_with(
            source,
            self.inner.params(),
            interpolation_from_u8(interpolation),
        );
        Ok(JsRenderedImage::from_decoded(output))
    }
}

impl Default for JsEditorSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Log an editor error to the browser console and convert it for JS.
fn to_js_error(err: EditorError) -> JsValue {
    warn(&err.to_string())
}

fn not_whole(value: f64) -> JsValue {
    warn(&format!("Expected a whole number, got {}", value))
}

fn warn(message: &str) -> JsValue {
    let message = JsValue::from_str(message);
    web_sys::console::warn_1(&message);
    message
}

/// `value` as an integer if it is finite and has no fractional part.
/// Magnitudes past `i64` saturate, which still fails the range checks.
fn whole_number(value: f64) -> Option<i64> {
    (value.is_finite() && value.fract() == 0.0).then(|| value as i64)
}
