//! Dochi Bonds WASM API
//!
//! JavaScript-facing functions. Everything here is a thin wrapper: it
//! converts between `JsValue` and the Rust models, calls into the pure
//! modules and reports failures to the browser console.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros, (de)serialization, error conversion
//! - `download`: Blob + anchor browser download
//! - `certificate`: certificate and receipt generation, layout preview
//! - `market`: project catalogue and transaction hashes

pub mod helpers;
pub mod download;
pub mod certificate;
pub mod market;

pub use certificate::{
    bond_filename, download_bond_pdf, generate_bond_pdf, generate_bond_pdf_base64,
    generate_receipt_pdf, preview_bond_layout,
};
pub use market::{generate_tx_hash_js, list_projects};
