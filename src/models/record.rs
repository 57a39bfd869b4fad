//! Investment record consumed by the certificate generator

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{CertificateError, Result};

/// Invested amount as supplied by the front end.
///
/// The KYC form hands the amount over as text, persisted rows may carry
/// either shape. Both are rendered verbatim; numbers drop a trailing `.0`
/// so that `5000` prints as `5000`, never `5000.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl Amount {
    /// Numeric value, if the amount is a finite number or numeric text
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Amount::Number(n) if n.is_finite() => Some(*n),
            Amount::Number(_) => None,
            Amount::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Amount::Number(n) => write!(f, "{}", n),
            Amount::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Amount {
    fn from(n: f64) -> Self {
        Amount::Number(n)
    }
}

impl From<u64> for Amount {
    fn from(n: u64) -> Self {
        Amount::Number(n as f64)
    }
}

impl From<&str> for Amount {
    fn from(s: &str) -> Self {
        Amount::Text(s.to_string())
    }
}

impl From<String> for Amount {
    fn from(s: String) -> Self {
        Amount::Text(s)
    }
}

/// Investor and investment data printed on a bond certificate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentRecord {
    /// Investor name as on Aadhar; printed upper-cased
    pub name: String,

    /// PAN card number, printed verbatim
    pub pan: String,

    /// Invested amount in INR
    pub amount: Amount,

    /// Project the money went into
    pub project_name: String,

    /// Transaction hash generated when the payment was recorded
    pub tx_hash: String,
}

impl InvestmentRecord {
    pub fn new(
        name: impl Into<String>,
        pan: impl Into<String>,
        amount: impl Into<Amount>,
        project_name: impl Into<String>,
        tx_hash: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            pan: pan.into(),
            amount: amount.into(),
            project_name: project_name.into(),
            tx_hash: tx_hash.into(),
        }
    }

    /// Check the caller-supplied fields before anything is drawn
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("name", &self.name),
            ("pan", &self.pan),
            ("projectName", &self.project_name),
            ("txHash", &self.tx_hash),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(CertificateError::InvalidRecord(format!(
                    "{} is required",
                    field
                )));
            }
        }

        if self.amount.as_f64().is_none() {
            return Err(CertificateError::InvalidRecord(format!(
                "amount '{}' is not a number",
                self.amount
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> InvestmentRecord {
        InvestmentRecord::new("Asha Rao", "ABCDE1234F", "5000", "Delhi-Mumbai Smart Expressway", "0xAB12CD34EF")
    }

    #[test]
    fn test_amount_display() {
        assert_eq!(Amount::Number(0.0).to_string(), "0");
        assert_eq!(Amount::Number(5000.0).to_string(), "5000");
        assert_eq!(Amount::Number(12.5).to_string(), "12.5");
        assert_eq!(Amount::from("2500.00").to_string(), "2500.00");
    }

    #[test]
    fn test_amount_deserializes_from_number_or_text() {
        let r: InvestmentRecord = serde_json::from_str(
            r#"{"name":"A","pan":"P","amount":0,"projectName":"X","txHash":"0x1"}"#,
        )
        .unwrap();
        assert_eq!(r.amount, Amount::Number(0.0));

        let r: InvestmentRecord = serde_json::from_str(
            r#"{"name":"A","pan":"P","amount":"750","projectName":"X","txHash":"0x1"}"#,
        )
        .unwrap();
        assert_eq!(r.amount, Amount::Text("750".to_string()));
    }

    #[test]
    fn test_validate_accepts_complete_record() {
        assert!(record().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let mut r = record();
        r.tx_hash = "   ".to_string();
        let err = r.validate().unwrap_err();
        assert!(err.to_string().contains("txHash"));
    }

    #[test]
    fn test_validate_rejects_non_numeric_amount() {
        let mut r = record();
        r.amount = Amount::from("five thousand");
        assert!(matches!(r.validate(), Err(CertificateError::InvalidRecord(_))));
    }
}
