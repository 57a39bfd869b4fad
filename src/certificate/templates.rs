//! Certificate body template
//!
//! The legal sentence printed under the heading is a Mustache template.
//! Values are inserted with triple braces: the output is plain text for
//! the PDF, not HTML, so nothing may be entity-escaped.

use mustache::Template;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::errors::Result;
use crate::models::InvestmentRecord;

/// Context data for the body template
#[derive(Debug, Clone, Serialize)]
pub struct BodyContext {
    /// Investor name, upper-cased
    pub name: String,
    pub pan: String,
    pub amount: String,
    pub project_name: String,
    pub tx_hash: String,
}

impl BodyContext {
    pub fn from_record(record: &InvestmentRecord) -> Self {
        Self {
            name: record.name.to_uppercase(),
            pan: record.pan.clone(),
            amount: record.amount.to_string(),
            project_name: record.project_name.clone(),
            tx_hash: record.tx_hash.clone(),
        }
    }
}

pub fn body_template() -> &'static str {
    include_str!("templates/bond_body.txt.mustache")
}

static BODY_TEMPLATE: Lazy<Template> = Lazy::new(|| {
    mustache::compile_str(body_template()).expect("bundled body template is valid")
});

/// Render the body paragraph for `record` as a single unwrapped string
pub fn render_body(record: &InvestmentRecord) -> Result<String> {
    let rendered = BODY_TEMPLATE.render_to_string(&BodyContext::from_record(record))?;
    Ok(rendered.trim().to_string())
}
