//! Certificate and receipt operations for the WASM API
//!
//! - Bond certificate: PDF bytes, base64 payload, direct download, preview
//! - Investment receipt: PDF bytes for a stored investment row

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::api::download::trigger_download;
use crate::api::helpers::{deserialize, serialize, to_js_error, to_uint8_array};
use crate::certificate::{
    certificate_filename, generate_receipt, CertificateGenerator, GeneratedCertificate,
};
use crate::config::CertificateConfig;
use crate::models::{format_issuance_date, InvestmentRecord, InvestmentRow, Issuance};
use crate::{wasm_error, wasm_info, wasm_log};

const PDF_MIME: &str = "application/pdf";

/// Certificate metadata returned alongside the PDF
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CertificateInfo {
    filename: String,
    certificate_number: u32,
    issued_on: String,
    body_lines: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pdf_base64: Option<String>,
}

impl CertificateInfo {
    fn from_generated(generated: &GeneratedCertificate, with_base64: bool) -> Self {
        Self {
            filename: generated.pdf.filename.clone(),
            certificate_number: generated.issuance.certificate_number.value(),
            issued_on: format_issuance_date(generated.issuance.issued_on),
            body_lines: generated.layout.body_lines.len(),
            pdf_base64: with_base64.then(|| generated.pdf.to_base64()),
        }
    }
}

/// Build a generator from an optional YAML layout override
fn generator_from(config_yaml: Option<String>) -> Result<CertificateGenerator, JsValue> {
    match config_yaml {
        Some(yaml) if !yaml.trim().is_empty() => {
            let config = CertificateConfig::from_yaml(&yaml)
                .map_err(|e| to_js_error("Certificate config error", e))?;
            Ok(CertificateGenerator::with_config(config))
        }
        _ => Ok(CertificateGenerator::new()),
    }
}

fn generate(record: JsValue, config_yaml: Option<String>) -> Result<GeneratedCertificate, JsValue> {
    let record: InvestmentRecord = deserialize(record, "Invalid investment record")?;
    wasm_log!("  Record for project '{}'", record.project_name);

    let generated = generator_from(config_yaml)?
        .generate(&record)
        .map_err(|e| to_js_error("Certificate generation error", e))?;

    wasm_info!(
        "  Certificate {} generated: {} bytes",
        generated.pdf.filename,
        generated.pdf.bytes.len()
    );
    Ok(generated)
}

/// Generate a bond certificate PDF
///
/// # Parameters
/// - `record`: `{ name, pan, amount, projectName, txHash }`
/// - `config_yaml`: optional YAML layout override
///
/// # Returns
/// `{ filename, certificateNumber, issuedOn, bodyLines, bytes: Uint8Array }`
#[wasm_bindgen(js_name = generateBondPdf)]
pub fn generate_bond_pdf(record: JsValue, config_yaml: Option<String>) -> Result<JsValue, JsValue> {
    wasm_info!("generateBondPdf called");

    let generated = generate(record, config_yaml)?;
    let result = serialize(
        &CertificateInfo::from_generated(&generated, false),
        "Failed to serialize certificate info",
    )?;
    js_sys::Reflect::set(&result, &JsValue::from_str("bytes"), &to_uint8_array(&generated.pdf.bytes))?;

    wasm_info!("generateBondPdf completed successfully");
    Ok(result)
}

/// Generate a bond certificate PDF as a base64 string (for data URLs and
/// JSON transport)
#[wasm_bindgen(js_name = generateBondPdfBase64)]
pub fn generate_bond_pdf_base64(record: JsValue, config_yaml: Option<String>) -> Result<JsValue, JsValue> {
    wasm_info!("generateBondPdfBase64 called");

    let generated = generate(record, config_yaml)?;
    serialize(
        &CertificateInfo::from_generated(&generated, true),
        "Failed to serialize certificate info",
    )
}

/// Generate a bond certificate and save it through a browser download
///
/// # Returns
/// The downloaded filename
#[wasm_bindgen(js_name = downloadBondPdf)]
pub fn download_bond_pdf(record: JsValue, config_yaml: Option<String>) -> Result<String, JsValue> {
    wasm_info!("downloadBondPdf called");

    let generated = generate(record, config_yaml)?;
    trigger_download(&generated.pdf.filename, &generated.pdf.bytes, PDF_MIME).map_err(|e| {
        wasm_error!("Download failed for {}: {:?}", generated.pdf.filename, e);
        e
    })?;

    wasm_info!("downloadBondPdf completed: {}", generated.pdf.filename);
    Ok(generated.pdf.filename)
}

/// Lay out a certificate without producing PDF
///
/// # Returns
/// Display list `{ page, ops: [...] }` with every element's position in mm
#[wasm_bindgen(js_name = previewBondLayout)]
pub fn preview_bond_layout(record: JsValue, config_yaml: Option<String>) -> Result<JsValue, JsValue> {
    wasm_info!("previewBondLayout called");

    let record: InvestmentRecord = deserialize(record, "Invalid investment record")?;
    let issuance = Issuance::now().map_err(|e| to_js_error("Issuance error", e))?;
    let list = generator_from(config_yaml)?
        .preview(&record, &issuance)
        .map_err(|e| to_js_error("Certificate layout error", e))?;

    wasm_log!("  Display list has {} ops", list.ops.len());
    serialize(&list, "Failed to serialize display list")
}

/// Filename a certificate for `name` will be saved under
#[wasm_bindgen(js_name = bondFilename)]
pub fn bond_filename(name: &str) -> String {
    certificate_filename(name)
}

/// Generate the investment receipt for a stored investment row
///
/// # Parameters
/// - `row`: `{ id, userId, userEmail, projectId, projectName, amount,
///   aadhar, pan, name, txHash, createdAt }`. The date may also come as
///   `timestamp` (ISO string or `{ seconds, nanoseconds }`); null or
///   missing means the current time.
///
/// # Returns
/// `{ filename, bytes: Uint8Array }`
#[wasm_bindgen(js_name = generateReceiptPdf)]
pub fn generate_receipt_pdf(row: JsValue) -> Result<JsValue, JsValue> {
    wasm_info!("generateReceiptPdf called");

    let row: InvestmentRow = deserialize(row, "Invalid investment row")?;
    let receipt = generate_receipt(&row);

    let result = serialize(&receipt, "Failed to serialize receipt")?;
    js_sys::Reflect::set(&result, &JsValue::from_str("bytes"), &to_uint8_array(&receipt.bytes))?;

    wasm_info!("  Receipt {} generated: {} bytes", receipt.filename, receipt.bytes.len());
    Ok(result)
}
