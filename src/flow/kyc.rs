//! KYC form data and its validation

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static PAN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("PAN pattern is valid"));

#[derive(Debug, Clone, Error, PartialEq)]
pub enum KycError {
    #[error("Full name is required")]
    MissingName,

    #[error("Invalid Aadhar number: '{0}' (must be 12 digits)")]
    InvalidAadhar(String),

    #[error("Invalid PAN: '{0}' (expected format ABCDE1234F)")]
    InvalidPan(String),

    #[error("Invalid investment amount: '{0}'")]
    InvalidAmount(String),

    #[error("Amount {amount} is below the minimum investment of {minimum}")]
    BelowMinimum { amount: f64, minimum: f64 },
}

/// Investor details collected by the KYC step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KycDetails {
    pub name: String,
    pub aadhar: String,
    pub pan: String,
    /// Amount as typed into the form
    pub amount: String,
}

impl KycDetails {
    /// Check the form and return a normalized copy: name trimmed, Aadhar
    /// without spaces, PAN upper-cased, amount trimmed
    pub fn validated(&self, minimum: f64) -> Result<KycDetails, KycError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(KycError::MissingName);
        }

        let aadhar: String = self.aadhar.chars().filter(|c| !c.is_whitespace()).collect();
        if aadhar.len() != 12 || !aadhar.chars().all(|c| c.is_ascii_digit()) {
            return Err(KycError::InvalidAadhar(self.aadhar.clone()));
        }

        let pan = self.pan.trim().to_uppercase();
        if !PAN_PATTERN.is_match(&pan) {
            return Err(KycError::InvalidPan(self.pan.clone()));
        }

        let amount = self.amount.trim();
        let value: f64 = amount
            .parse()
            .ok()
            .filter(|v: &f64| v.is_finite() && *v > 0.0)
            .ok_or_else(|| KycError::InvalidAmount(self.amount.clone()))?;
        if value < minimum {
            return Err(KycError::BelowMinimum {
                amount: value,
                minimum,
            });
        }

        Ok(KycDetails {
            name: name.to_string(),
            aadhar,
            pan,
            amount: amount.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> KycDetails {
        KycDetails {
            name: " Asha Rao ".to_string(),
            aadhar: "1234 5678 9012".to_string(),
            pan: "abcde1234f".to_string(),
            amount: "5000".to_string(),
        }
    }

    #[test]
    fn test_valid_details_are_normalized() {
        let ok = details().validated(5000.0).unwrap();
        assert_eq!(ok.name, "Asha Rao");
        assert_eq!(ok.aadhar, "123456789012");
        assert_eq!(ok.pan, "ABCDE1234F");
        assert_eq!(ok.amount, "5000");
    }

    #[test]
    fn test_rejects_bad_pan() {
        let mut d = details();
        d.pan = "ABCD1234F".to_string();
        assert!(matches!(d.validated(0.0), Err(KycError::InvalidPan(_))));
    }

    #[test]
    fn test_rejects_short_aadhar() {
        let mut d = details();
        d.aadhar = "1234".to_string();
        assert!(matches!(d.validated(0.0), Err(KycError::InvalidAadhar(_))));
    }

    #[test]
    fn test_rejects_blank_name() {
        let mut d = details();
        d.name = "  ".to_string();
        assert_eq!(d.validated(0.0), Err(KycError::MissingName));
    }

    #[test]
    fn test_amount_rules() {
        let mut d = details();
        d.amount = "abc".to_string();
        assert!(matches!(d.validated(0.0), Err(KycError::InvalidAmount(_))));

        d.amount = "0".to_string();
        assert!(matches!(d.validated(0.0), Err(KycError::InvalidAmount(_))));

        d.amount = "999".to_string();
        assert_eq!(
            d.validated(1000.0),
            Err(KycError::BelowMinimum { amount: 999.0, minimum: 1000.0 })
        );
    }
}
