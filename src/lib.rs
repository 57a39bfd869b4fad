//! Dochi Bonds WASM Module
//!
//! Certificate generation and investment flow for the Dochi Bonds
//! tokenized infrastructure bond marketplace. The pure Rust modules work
//! natively; `api` exposes them to the browser.

pub mod errors;
pub mod models;
pub mod config;
pub mod renderers;
pub mod certificate;
pub mod catalog;
pub mod store;
pub mod flow;
pub mod api;

// Re-export commonly used types
pub use errors::{CertificateError, Result};
pub use models::{Amount, CertificateNumber, InvestmentRecord, Issuance};
pub use certificate::{
    certificate_filename, generate_certificate, CertificateGenerator, GeneratedCertificate,
    PdfDocument,
};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Fails only when a logger is already installed
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Dochi Bonds WASM module initialized");
}
