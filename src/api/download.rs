//! Browser download of generated files

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::api::helpers::to_uint8_array;

/// Hand `bytes` to the browser as a file download named `filename`
pub fn trigger_download(filename: &str, bytes: &[u8], mime_type: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window available"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document available"))?;

    let parts = js_sys::Array::of1(&to_uint8_array(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)?;
    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}
