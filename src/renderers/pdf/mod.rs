//! PDF rendering backend
//!
//! [`PdfSurface`] turns drawing calls into a PDF content stream and
//! [`writer::write_pdf`] wraps that stream into a complete file.

pub mod encoding;
pub mod writer;

use super::font_metrics::MM_PER_PT;
use super::surface::{DrawingSurface, FontFace, PageSize, Rect, Rgb, Stroke, TextStyle};
use encoding::push_pdf_string;
use writer::{write_pdf, PageContent};

/// Points per millimetre
pub const PT_PER_MM: f32 = 1.0 / MM_PER_PT;

fn font_resource(face: FontFace) -> &'static str {
    match face {
        FontFace::Regular => "F1",
        FontFace::Bold => "F2",
    }
}

/// Single-page PDF drawing surface
pub struct PdfSurface {
    page: PageSize,
    stream: String,
    title: Option<String>,
}

impl PdfSurface {
    pub fn new(page: PageSize) -> Self {
        Self {
            page,
            stream: String::new(),
            title: None,
        }
    }

    /// Document title written to the Info dictionary
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Content stream drawn so far
    pub fn content_stream(&self) -> &str {
        &self.stream
    }

    /// Serialize the finished page
    pub fn finish(self) -> Vec<u8> {
        let stream = self.stream.trim_end();
        write_pdf(&PageContent {
            width_pt: self.page.width_mm * PT_PER_MM,
            height_pt: self.page.height_mm * PT_PER_MM,
            stream,
            title: self.title.as_deref(),
        })
    }

    fn x_pt(&self, x_mm: f32) -> f32 {
        x_mm * PT_PER_MM
    }

    /// PDF user space grows upwards from the bottom edge
    fn y_pt(&self, y_mm: f32) -> f32 {
        (self.page.height_mm - y_mm) * PT_PER_MM
    }

    fn push_fill_color(&mut self, color: Rgb) {
        let (r, g, b) = color.unit_components();
        self.stream.push_str(&format!("{:.3} {:.3} {:.3} rg\n", r, g, b));
    }

    fn push_stroke_color(&mut self, color: Rgb) {
        let (r, g, b) = color.unit_components();
        self.stream.push_str(&format!("{:.3} {:.3} {:.3} RG\n", r, g, b));
    }

    fn push_text_object(&mut self, text: &str, matrix: [f32; 6], style: &TextStyle) {
        self.stream.push_str("q\n");
        self.push_fill_color(style.color);
        self.stream.push_str("BT\n");
        self.stream.push_str(&format!(
            "/{} {:.2} Tf\n",
            font_resource(style.face),
            style.size_pt
        ));
        self.stream.push_str(&format!(
            "{:.4} {:.4} {:.4} {:.4} {:.2} {:.2} Tm\n",
            matrix[0], matrix[1], matrix[2], matrix[3], matrix[4], matrix[5]
        ));
        push_pdf_string(&mut self.stream, text);
        self.stream.push_str(" Tj\nET\nQ\n");
    }
}

impl DrawingSurface for PdfSurface {
    fn fill_background(&mut self, color: Rgb) {
        self.stream.push_str("q\n");
        self.push_fill_color(color);
        self.stream.push_str(&format!(
            "0 0 {:.2} {:.2} re\nf\nQ\n",
            self.page.width_mm * PT_PER_MM,
            self.page.height_mm * PT_PER_MM
        ));
    }

    fn draw_rect(&mut self, rect: Rect, stroke: Stroke) {
        self.stream.push_str("q\n");
        self.push_stroke_color(stroke.color);
        self.stream
            .push_str(&format!("{:.2} w\n", stroke.width_mm * PT_PER_MM));
        self.stream.push_str(&format!(
            "{:.2} {:.2} {:.2} {:.2} re\nS\nQ\n",
            self.x_pt(rect.x),
            self.y_pt(rect.y + rect.height),
            rect.width * PT_PER_MM,
            rect.height * PT_PER_MM
        ));
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
        let left = style.left_edge(text, x);
        let matrix = [1.0, 0.0, 0.0, 1.0, self.x_pt(left), self.y_pt(y)];
        self.push_text_object(text, matrix, style);
    }

    fn draw_rotated_text(&mut self, text: &str, x: f32, y: f32, angle_deg: f32, style: &TextStyle) {
        let left = style.left_edge(text, x);
        let (sin, cos) = angle_deg.to_radians().sin_cos();
        let matrix = [cos, sin, -sin, cos, self.x_pt(left), self.y_pt(y)];
        self.push_text_object(text, matrix, style);
    }
}
