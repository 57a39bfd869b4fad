//! Marketplace operations for the WASM API

use wasm_bindgen::prelude::*;

use crate::api::helpers::{serialize, to_js_error};
use crate::catalog::projects;
use crate::flow::generate_tx_hash;
use crate::wasm_log;

/// All listed bond offerings
#[wasm_bindgen(js_name = listProjects)]
pub fn list_projects() -> Result<JsValue, JsValue> {
    wasm_log!("listProjects: {} projects", projects().len());
    serialize(&projects(), "Failed to serialize projects")
}

/// Fresh transaction hash (`0x` + 10 upper-case hex digits) to store with
/// a payment before the certificate is generated
#[wasm_bindgen(js_name = generateTxHash)]
pub fn generate_tx_hash_js() -> Result<String, JsValue> {
    generate_tx_hash().map_err(|e| to_js_error("Transaction hash error", e))
}
