//! Filter catalog WASM bindings.
//!
//! Exposes the filter names for building the dropdown, plus stateless
//! helpers for applying a full transform to an image without a session.

use crate::types::JsRenderedImage;
use photoedit_core::{FilterKind, TransformParameters};
use wasm_bindgen::prelude::*;

/// All filter display names in dropdown order.
#[wasm_bindgen]
pub fn filter_names() -> js_sys::Array {
    FilterKind::ALL
        .iter()
        .map(|kind| JsValue::from_str(kind.name()))
        .collect()
}

/// Caption for a filter name. Unknown names get the "Original Image" caption.
#[wasm_bindgen]
pub fn filter_caption(name: &str) -> String {
    FilterKind::from_name_or_original(name).caption().to_string()
}

/// Whether the named filter uses the intensity slider.
#[wasm_bindgen]
pub fn filter_takes_intensity(name: &str) -> bool {
    FilterKind::from_name_or_original(name).takes_intensity()
}

/// Flip, rotate and filter an image in one call.
///
/// # Arguments
///
/// * `image` - Source image
/// * `params` - Object with `filter`, `flip`, `rotation_degrees` and
///   `intensity`; missing fields take their defaults
///
/// # Example
///
/// ```typescript
/// const out = apply_transform(image, { filter: 'Sepia', rotation_degrees: 30 });
/// ```
#[wasm_bindgen]
pub fn apply_transform(image: &JsRenderedImage, params: JsValue) -> Result<JsRenderedImage, JsValue> {
    let params: TransformParameters = serde_wasm_bindgen::from_value(params)
        .map_err(|e| JsValue::from_str(&format!("Invalid parameters: {}", e)))?;
    params
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(apply_params(image, &params))
}

pub(crate) fn apply_params(image: &JsRenderedImage, params: &TransformParameters) -> JsRenderedImage {
    JsRenderedImage::from_decoded(photoedit_core::render(image.as_decoded(), params))
}
