//! Error types for certificate generation
//!
//! Input errors are raised at the boundary before anything is drawn;
//! layout and template failures come from the generator itself, and
//! delivery failures wrap the underlying I/O error.

use thiserror::Error;

/// Top-level certificate error type
#[derive(Debug, Error)]
pub enum CertificateError {
    /// Required field missing or of the wrong shape
    #[error("Invalid investment record: {0}")]
    InvalidRecord(String),

    /// Wrapped body text does not fit on the page
    #[error("Body text overflows the page: {lines} lines wrapped, room for {available}")]
    LayoutOverflow { lines: usize, available: usize },

    /// A single word in the body is wider than the body area
    #[error("Body line is {width_mm:.1} mm wide, limit is {max_width_mm:.1} mm")]
    LineTooWide { width_mm: f32, max_width_mm: f32 },

    /// Body template failed to compile or render
    #[error("Template rendering failed: {0}")]
    Template(String),

    /// Certificate configuration could not be parsed
    #[error("Invalid certificate configuration: {0}")]
    Config(String),

    /// The platform random source was unavailable
    #[error("Random source unavailable: {0}")]
    Entropy(String),

    /// Writing the finished document failed
    #[error("Failed to deliver document: {0}")]
    Io(#[from] std::io::Error),
}

impl From<mustache::Error> for CertificateError {
    fn from(e: mustache::Error) -> Self {
        CertificateError::Template(e.to_string())
    }
}

impl From<getrandom::Error> for CertificateError {
    fn from(e: getrandom::Error) -> Self {
        CertificateError::Entropy(e.to_string())
    }
}

impl From<serde_yaml::Error> for CertificateError {
    fn from(e: serde_yaml::Error) -> Self {
        CertificateError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CertificateError>;
