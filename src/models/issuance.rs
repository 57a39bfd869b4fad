//! Per-invocation certificate data: number and date of issuance

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::Result;

/// Largest certificate number that can be issued
pub const MAX_CERTIFICATE_NUMBER: u32 = 999_999;

/// Date format printed on certificates and receipts (en-IN, DD/MM/YYYY)
pub const ISSUANCE_DATE_FORMAT: &str = "%d/%m/%Y";

/// Certificate serial in `0..=999_999`.
///
/// Drawn at random for each generated certificate. Numbers are not
/// unique across invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CertificateNumber(u32);

impl CertificateNumber {
    pub fn new(value: u32) -> Option<Self> {
        (value <= MAX_CERTIFICATE_NUMBER).then_some(Self(value))
    }

    /// Draw a fresh number from the platform random source
    pub fn random() -> Result<Self> {
        let mut buf = [0u8; 4];
        getrandom::getrandom(&mut buf)?;
        Ok(Self(u32::from_le_bytes(buf) % (MAX_CERTIFICATE_NUMBER + 1)))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for CertificateNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for CertificateNumber {
    type Error = String;

    fn try_from(value: u32) -> std::result::Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| {
            format!(
                "Certificate number {} out of range (max: {})",
                value, MAX_CERTIFICATE_NUMBER
            )
        })
    }
}

impl From<CertificateNumber> for u32 {
    fn from(n: CertificateNumber) -> Self {
        n.0
    }
}

/// The two fields the generator fills in itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issuance {
    pub certificate_number: CertificateNumber,
    pub issued_on: NaiveDate,
}

impl Issuance {
    pub fn new(certificate_number: CertificateNumber, issued_on: NaiveDate) -> Self {
        Self {
            certificate_number,
            issued_on,
        }
    }

    /// Random certificate number, dated today in local time
    pub fn now() -> Result<Self> {
        Ok(Self {
            certificate_number: CertificateNumber::random()?,
            issued_on: Local::now().date_naive(),
        })
    }
}

pub fn format_issuance_date(date: NaiveDate) -> String {
    date.format(ISSUANCE_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_certificate_number_range() {
        assert!(CertificateNumber::new(0).is_some());
        assert!(CertificateNumber::new(999_999).is_some());
        assert!(CertificateNumber::new(1_000_000).is_none());
    }

    #[test]
    fn test_random_numbers_stay_in_range() {
        for _ in 0..200 {
            let n = CertificateNumber::random().unwrap();
            assert!(n.value() <= MAX_CERTIFICATE_NUMBER);
        }
    }

    #[test]
    fn test_certificate_number_rejects_out_of_range_json() {
        let parsed: std::result::Result<CertificateNumber, _> = serde_json::from_str("1000000");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_date_format() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(format_issuance_date(date), "07/03/2024");
    }
}
