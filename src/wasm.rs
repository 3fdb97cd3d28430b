//! WASM bindings for selecting and editing HTML in the browser.
//!
//! Values cross the boundary as strings: markup in, markup or JSON out.

use wasm_bindgen::prelude::*;

use crate::{Document, Operation, Read, apply_all};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Text of the elements matching `selector`, as JSON (a string for one
/// element, an array otherwise).
#[wasm_bindgen]
pub fn select_text(html: &str, selector: &str) -> Result<String, JsValue> {
    read(html, selector, Read::Text)
}

/// An attribute of the elements matching `selector`, as JSON. Missing
/// attributes are `null`.
#[wasm_bindgen]
pub fn select_attr(html: &str, selector: &str, name: &str) -> Result<String, JsValue> {
    read(html, selector, Read::Attr(name.to_string()))
}

/// Apply a JSON array of operations to the elements matching `selector` and
/// return the edited document.
#[wasm_bindgen]
pub fn apply(html: &str, selector: &str, ops_json: &str) -> Result<String, JsValue> {
    let operations: Vec<Operation> = serde_json::from_str(ops_json).map_err(js_error)?;
    let doc = Document::parse(html);
    let selection = doc.get(selector).map_err(js_error)?;
    apply_all(&selection, &operations).map_err(js_error)?;
    Ok(doc.to_html())
}

fn read(html: &str, selector: &str, read: Read) -> Result<String, JsValue> {
    let doc = Document::parse(html);
    let selection = doc.get(selector).map_err(js_error)?;
    serde_json::to_string(&read.read(&selection)).map_err(js_error)
}
