//! Marketplace bond offering

use serde::{Deserialize, Serialize};

/// A tokenized infrastructure bond listed on the marketplace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub name: String,
    /// Issuing authority (e.g. "NHAI")
    pub authority: String,
    /// Yield label as shown on the listing (e.g. "12.4% Fixed")
    pub roi: String,
    /// Minimum ticket, formatted with Indian digit grouping (e.g. "5,000")
    pub min_invest: String,
    pub impact: String,
    pub tag: String,
    pub details: String,
}

impl Project {
    /// Minimum ticket as a plain number, grouping commas removed
    pub fn min_investment(&self) -> f64 {
        self.min_invest_digits().parse().unwrap_or(0.0)
    }

    /// Minimum ticket without grouping commas, used to pre-fill the KYC form
    pub fn min_invest_digits(&self) -> String {
        self.min_invest.replace(',', "")
    }
}
