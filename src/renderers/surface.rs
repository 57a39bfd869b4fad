//! Drawing surface abstraction
//!
//! Layout code draws through [`DrawingSurface`] and never talks to a
//! concrete backend. Coordinates are millimetres from the top-left corner
//! of the page; text `y` is the baseline.

use serde::{Deserialize, Serialize};

use super::font_metrics::text_width_mm;

/// Page dimensions in millimetres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSize {
    pub width_mm: f32,
    pub height_mm: f32,
}

impl PageSize {
    /// ISO A4 portrait
    pub const A4: PageSize = PageSize {
        width_mm: 210.0,
        height_mm: 297.0,
    };
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::A4
    }
}

/// 8-bit RGB colour, written as `[r, g, b]` in config files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Components scaled to 0.0..=1.0
    pub fn unit_components(&self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

/// Serif font faces available to every backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFace {
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    /// `x` is the horizontal centre of the run
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub face: FontFace,
    pub size_pt: f32,
    pub color: Rgb,
    #[serde(default)]
    pub align: TextAlign,
}

impl TextStyle {
    pub fn new(face: FontFace, size_pt: f32, color: Rgb) -> Self {
        Self {
            face,
            size_pt,
            color,
            align: TextAlign::Left,
        }
    }

    pub fn centered(mut self) -> Self {
        self.align = TextAlign::Center;
        self
    }

    /// Rendered width of `text` in this style
    pub fn width_of(&self, text: &str) -> f32 {
        text_width_mm(text, self.face, self.size_pt)
    }

    /// Left edge of `text` when anchored at `x` with this alignment
    pub fn left_edge(&self, text: &str, x: f32) -> f32 {
        match self.align {
            TextAlign::Left => x,
            TextAlign::Center => x - self.width_of(text) / 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stroke {
    pub color: Rgb,
    pub width_mm: f32,
}

/// Minimal vector drawing API the certificate layouts are written against
pub trait DrawingSurface {
    /// Paint the whole page with a solid colour
    fn fill_background(&mut self, color: Rgb);

    /// Stroke the outline of a rectangle
    fn draw_rect(&mut self, rect: Rect, stroke: Stroke);

    /// Draw a single line of text with its baseline at `y`
    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle);

    /// Draw text rotated counter-clockwise by `angle_deg` around its anchor
    fn draw_rotated_text(&mut self, text: &str, x: f32, y: f32, angle_deg: f32, style: &TextStyle);
}
