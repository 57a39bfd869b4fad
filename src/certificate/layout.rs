//! Bond certificate page layout
//!
//! Positions everything on the page and draws it through a
//! [`DrawingSurface`]. Layout is a pure function of the record, the
//! issuance data and the configuration.

use crate::config::CertificateConfig;
use crate::errors::{CertificateError, Result};
use crate::models::{format_issuance_date, InvestmentRecord, Issuance};
use crate::renderers::font_metrics::MM_PER_PT;
use crate::renderers::{wrap_text, DrawingSurface, FontFace, Rect, Rgb, Stroke, TextStyle};

use super::templates::render_body;

/// Where the variable-length parts of the page ended up
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSummary {
    /// `CERTIFICATE NO: ...` line as printed
    pub certificate_line: String,
    /// `DATE OF ISSUANCE: ...` line as printed
    pub date_line: String,
    /// Body paragraph after wrapping
    pub body_lines: Vec<String>,
    /// Baseline of the first body line
    pub body_top_mm: f32,
    /// Baseline distance between body lines
    pub body_line_height_mm: f32,
}

/// Number of body lines that fit between `top` and the bottom margin
fn available_body_lines(config: &CertificateConfig, top: f32, line_height: f32) -> usize {
    let limit = config.page.height_mm - config.body.bottom_margin_mm;
    if top > limit {
        return 0;
    }
    ((limit - top) / line_height).floor() as usize + 1
}

/// Draw a bond certificate for `record` onto `surface`.
///
/// The body is wrapped and measured before anything is drawn, so a body
/// that is too long, or holds a word too wide for a line, leaves the
/// surface untouched.
pub fn layout_certificate<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    record: &InvestmentRecord,
    issuance: &Issuance,
    config: &CertificateConfig,
) -> Result<LayoutSummary> {
    let page_width = config.page.width_mm;
    let center_x = page_width / 2.0;

    let details = &config.details;
    let number_y = details.first_y_mm;
    let date_y = number_y + details.line_gap_mm;
    let heading_y = date_y + config.heading.gap_mm;
    let body_top = heading_y + config.body.gap_mm;

    let body_style = TextStyle::new(FontFace::Regular, config.body.size_pt, Rgb::BLACK);
    let body_width = page_width - 2.0 * config.body.margin_mm;
    let body_line_height = config.body.size_pt * config.body.line_height_factor * MM_PER_PT;
    let body_lines = wrap_text(&render_body(record)?, body_width, &body_style);

    if let Some(width_mm) = body_lines
        .iter()
        .map(|line| body_style.width_of(line))
        .find(|width| *width > body_width)
    {
        log::warn!(
            "Certificate body line is {:.1} mm wide, page has room for {:.1} mm",
            width_mm,
            body_width
        );
        return Err(CertificateError::LineTooWide {
            width_mm,
            max_width_mm: body_width,
        });
    }

    let available = available_body_lines(config, body_top, body_line_height);
    if body_lines.len() > available {
        log::warn!(
            "Certificate body needs {} lines, page has room for {}",
            body_lines.len(),
            available
        );
        return Err(CertificateError::LayoutOverflow {
            lines: body_lines.len(),
            available,
        });
    }

    // Parchment
    surface.fill_background(config.background);

    // Stamp-duty header box
    let stamp = &config.stamp;
    surface.draw_rect(
        Rect {
            x: stamp.inset_mm,
            y: stamp.inset_mm,
            width: page_width - 2.0 * stamp.inset_mm,
            height: stamp.height_mm,
        },
        Stroke {
            color: stamp.ink,
            width_mm: stamp.stroke_width_mm,
        },
    );

    let stamp_line = |size: f32| TextStyle::new(FontFace::Bold, size, stamp.ink).centered();
    surface.draw_text(&stamp.label, center_x, stamp.label_y_mm, &stamp_line(stamp.label_size_pt));
    surface.draw_text(&stamp.caption, center_x, stamp.caption_y_mm, &stamp_line(stamp.caption_size_pt));
    surface.draw_text(&stamp.value, center_x, stamp.value_y_mm, &stamp_line(stamp.value_size_pt));

    // Certificate number and date
    let details_style = TextStyle::new(FontFace::Regular, details.size_pt, Rgb::BLACK);
    let certificate_line = format!(
        "{}{}{}",
        details.number_label, details.number_prefix, issuance.certificate_number
    );
    let date_line = format!(
        "{}{}",
        details.date_label,
        format_issuance_date(issuance.issued_on)
    );
    surface.draw_text(&certificate_line, details.left_mm, number_y, &details_style);
    surface.draw_text(&date_line, details.left_mm, date_y, &details_style);

    // Heading
    let heading_style = TextStyle::new(FontFace::Bold, config.heading.size_pt, Rgb::BLACK).centered();
    surface.draw_text(&config.heading.text, center_x, heading_y, &heading_style);

    // Body
    for (i, line) in body_lines.iter().enumerate() {
        let y = body_top + i as f32 * body_line_height;
        surface.draw_text(line, config.body.margin_mm, y, &body_style);
    }

    // Watermark goes last and may overlay the body
    let watermark = &config.watermark;
    let watermark_style = TextStyle::new(FontFace::Regular, watermark.size_pt, watermark.color);
    surface.draw_rotated_text(
        &watermark.text,
        watermark.x_mm,
        watermark.y_mm,
        watermark.angle_deg,
        &watermark_style,
    );

    Ok(LayoutSummary {
        certificate_line,
        date_line,
        body_lines,
        body_top_mm: body_top,
        body_line_height_mm: body_line_height,
    })
}
