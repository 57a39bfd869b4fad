//! Investment receipt
//!
//! Plain one-page summary of a persisted investment, offered next to each
//! holding in the portfolio view. Unlike the certificate it carries no
//! random data: the date comes from the stored creation timestamp.

use chrono::{Local, TimeZone};

use crate::models::{format_issuance_date, InvestmentRow};
use crate::renderers::{DrawingSurface, FontFace, PageSize, PdfSurface, Rgb, TextStyle};

use super::PdfDocument;

pub const RECEIPT_TITLE: &str = "OFFICIAL TOKENIZED INFRASTRUCTURE BOND";

const LEFT_MM: f32 = 20.0;
const TITLE_Y_MM: f32 = 20.0;
const FIRST_LINE_Y_MM: f32 = 40.0;
const LINE_GAP_MM: f32 = 10.0;

/// `<project name>_Bond.pdf`
pub fn receipt_filename(project_name: &str) -> String {
    format!("{}_Bond.pdf", project_name)
}

/// The labelled lines printed under the title, top to bottom, dated in
/// the viewer's local time zone
pub fn receipt_lines(row: &InvestmentRow) -> Vec<String> {
    receipt_lines_in(row, &Local)
}

/// [`receipt_lines`] with the date taken in `tz`
pub fn receipt_lines_in<Tz: TimeZone>(row: &InvestmentRow, tz: &Tz) -> Vec<String> {
    let investment = &row.investment;
    let date = row.created_at.with_timezone(tz).date_naive();
    vec![
        format!("Project: {}", investment.project_name),
        format!("Investor: {}", investment.name),
        format!("Amount: INR {}", investment.amount),
        format!("Date: {}", format_issuance_date(date)),
        format!("Transaction Hash: {}", investment.tx_hash),
    ]
}

pub fn layout_receipt<S: DrawingSurface + ?Sized>(surface: &mut S, row: &InvestmentRow) {
    let title_style = TextStyle::new(FontFace::Regular, 22.0, Rgb::BLACK);
    let line_style = TextStyle::new(FontFace::Regular, 12.0, Rgb::BLACK);

    surface.draw_text(RECEIPT_TITLE, LEFT_MM, TITLE_Y_MM, &title_style);
    for (i, line) in receipt_lines(row).iter().enumerate() {
        let y = FIRST_LINE_Y_MM + i as f32 * LINE_GAP_MM;
        surface.draw_text(line, LEFT_MM, y, &line_style);
    }
}

/// Render the receipt for a stored investment
pub fn generate_receipt(row: &InvestmentRow) -> PdfDocument {
    let filename = receipt_filename(&row.investment.project_name);
    let mut surface = PdfSurface::new(PageSize::A4).with_title(RECEIPT_TITLE);
    layout_receipt(&mut surface, row);

    log::debug!("Rendered receipt {} for investment {}", filename, row.id);

    PdfDocument {
        filename,
        bytes: surface.finish(),
    }
}
