//! Models module for Dochi Bonds
//!
//! Plain data records passed between the investment flow, the store
//! interfaces and the certificate generator.

pub mod record;
pub mod issuance;
pub mod project;
pub mod investment;

// Re-export commonly used types
pub use record::{Amount, InvestmentRecord};
pub use issuance::{format_issuance_date, CertificateNumber, Issuance, MAX_CERTIFICATE_NUMBER};
pub use project::Project;
pub use investment::{InvestmentRow, NewInvestment, User};
