//! WASM build test
//!
//! Checks that the exported API works when running in a browser.

#![cfg(target_arch = "wasm32")]

use dochi_bonds_wasm::api::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn record() -> JsValue {
    let record = js_sys::Object::new();
    for (key, value) in [
        ("name", "Asha Rao"),
        ("pan", "ABCDE1234F"),
        ("amount", "5000"),
        ("projectName", "Delhi-Mumbai Smart Expressway"),
        ("txHash", "0xAB12CD34EF"),
    ] {
        js_sys::Reflect::set(&record, &JsValue::from_str(key), &JsValue::from_str(value)).unwrap();
    }
    record.into()
}

#[wasm_bindgen_test]
fn test_bond_filename() {
    assert_eq!(bond_filename("Asha Rao"), "Bond_Asha_Rao.pdf");
}

#[wasm_bindgen_test]
fn test_generate_bond_pdf() {
    let result = generate_bond_pdf(record(), None).unwrap();
    let filename = js_sys::Reflect::get(&result, &JsValue::from_str("filename")).unwrap();
    assert_eq!(filename.as_string().unwrap(), "Bond_Asha_Rao.pdf");

    let bytes = js_sys::Reflect::get(&result, &JsValue::from_str("bytes")).unwrap();
    let bytes = js_sys::Uint8Array::new(&bytes).to_vec();
    assert!(bytes.starts_with(b"%PDF-1.4"));
}

#[wasm_bindgen_test]
fn test_invalid_record_is_an_error() {
    let empty: JsValue = js_sys::Object::new().into();
    assert!(generate_bond_pdf(empty, None).is_err());
}

#[wasm_bindgen_test]
fn test_list_projects() {
    let projects = list_projects().unwrap();
    assert!(js_sys::Array::is_array(&projects));
    assert_eq!(js_sys::Array::from(&projects).length(), 3);
}

#[wasm_bindgen_test]
fn test_generate_tx_hash() {
    let hash = generate_tx_hash_js().unwrap();
    assert_eq!(hash.len(), 12);
    assert!(hash.starts_with("0x"));
}
