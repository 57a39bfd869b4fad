//! Bond certificate generation
//!
//! Turns an [`InvestmentRecord`] into a one-page A4 PDF that looks like a
//! stamped government bond: stamp-duty header box, certificate number and
//! issuance date, a heading, the wrapped legal paragraph and a rotated
//! watermark.
//!
//! # Basic Usage
//!
//! ```ignore
//! use dochi_bonds_wasm::certificate::generate_certificate;
//! use dochi_bonds_wasm::models::InvestmentRecord;
//!
//! let record = InvestmentRecord::new(
//!     "Asha Rao", "ABCDE1234F", "5000",
//!     "Delhi-Mumbai Smart Expressway", "0xAB12CD34EF",
//! );
//! let certificate = generate_certificate(&record)?;
//! assert_eq!(certificate.pdf.filename, "Bond_Asha_Rao.pdf");
//! certificate.pdf.save_to(std::path::Path::new("/tmp"))?;
//! ```

pub mod templates;
pub mod layout;
pub mod receipt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::CertificateConfig;
use crate::errors::Result;
use crate::models::{InvestmentRecord, Issuance};
use crate::renderers::{DisplayList, PdfSurface};

pub use layout::{layout_certificate, LayoutSummary};
pub use receipt::{generate_receipt, receipt_filename};
pub use templates::render_body;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// `Bond_<name>.pdf`, every whitespace run in the name replaced by one `_`
pub fn certificate_filename(name: &str) -> String {
    format!("Bond_{}.pdf", WHITESPACE_RUN.replace_all(name, "_"))
}

/// A finished PDF file ready to be delivered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PdfDocument {
    pub filename: String,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl PdfDocument {
    /// Write the document into `dir` under its own filename
    pub fn save_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.bytes)?;
        log::info!("Saved {} ({} bytes)", path.display(), self.bytes.len());
        Ok(path)
    }

    pub fn to_base64(&self) -> String {
        base64::Engine::encode(&base64::engine::general_purpose::STANDARD, &self.bytes)
    }
}

/// Result of one certificate generation
#[derive(Debug, Clone)]
pub struct GeneratedCertificate {
    pub pdf: PdfDocument,
    pub issuance: Issuance,
    pub layout: LayoutSummary,
}

/// Certificate generator bound to one layout configuration.
///
/// Holds no per-call state, so one generator can serve any number of
/// callers.
#[derive(Debug, Clone, Default)]
pub struct CertificateGenerator {
    config: CertificateConfig,
}

impl CertificateGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CertificateConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CertificateConfig {
        &self.config
    }

    /// Validate `record` and render it with a fresh random certificate
    /// number dated today
    pub fn generate(&self, record: &InvestmentRecord) -> Result<GeneratedCertificate> {
        record.validate()?;
        self.render(record, Issuance::now()?)
    }

    /// Validate `record` and render it with caller-supplied issuance data
    pub fn generate_with_issuance(
        &self,
        record: &InvestmentRecord,
        issuance: Issuance,
    ) -> Result<GeneratedCertificate> {
        record.validate()?;
        self.render(record, issuance)
    }

    /// Lay the certificate out into a display list instead of a PDF
    pub fn preview(&self, record: &InvestmentRecord, issuance: &Issuance) -> Result<DisplayList> {
        record.validate()?;
        let mut list = DisplayList::new(self.config.page);
        layout_certificate(&mut list, record, issuance, &self.config)?;
        Ok(list)
    }

    fn render(&self, record: &InvestmentRecord, issuance: Issuance) -> Result<GeneratedCertificate> {
        let filename = certificate_filename(&record.name);
        let mut surface = PdfSurface::new(self.config.page)
            .with_title(filename.trim_end_matches(".pdf"));
        let layout = layout_certificate(&mut surface, record, &issuance, &self.config)?;
        let bytes = surface.finish();

        log::debug!(
            "Generated {} ({} bytes, {} body lines, certificate {})",
            filename,
            bytes.len(),
            layout.body_lines.len(),
            issuance.certificate_number
        );

        Ok(GeneratedCertificate {
            pdf: PdfDocument { filename, bytes },
            issuance,
            layout,
        })
    }
}

/// Generate a certificate with the default layout
pub fn generate_certificate(record: &InvestmentRecord) -> Result<GeneratedCertificate> {
    CertificateGenerator::new().generate(record)
}
