//! Display List for certificate previews
//!
//! A [`DrawingSurface`] that records every drawing call instead of
//! rasterising it. The list is serialized to JavaScript so the front end
//! can show a preview without parsing PDF, and it is what tests inspect
//! to check positions and text.

use serde::{Deserialize, Serialize};

use super::surface::{DrawingSurface, PageSize, Rect, Rgb, Stroke, TextStyle};

/// One recorded drawing call
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DrawOp {
    FillBackground {
        color: Rgb,
    },

    Rect {
        rect: Rect,
        stroke: Stroke,
    },

    Text {
        text: String,
        /// Anchor X as passed by the layout
        x: f32,
        /// Baseline Y
        y: f32,
        /// Left edge after alignment
        left: f32,
        style: TextStyle,
    },

    RotatedText {
        text: String,
        x: f32,
        y: f32,
        angle_deg: f32,
        style: TextStyle,
    },
}

impl DrawOp {
    /// Text carried by this op, if any
    pub fn text(&self) -> Option<&str> {
        match self {
            DrawOp::Text { text, .. } | DrawOp::RotatedText { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// Top-level display list for a single page
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DisplayList {
    pub page: PageSize,
    pub ops: Vec<DrawOp>,
}

impl DisplayList {
    pub fn new(page: PageSize) -> Self {
        Self {
            page,
            ops: Vec::new(),
        }
    }

    /// All text runs in drawing order
    pub fn text_runs(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(DrawOp::text)
    }

    /// Position of the first op drawing exactly `text`
    pub fn find_text(&self, text: &str) -> Option<&DrawOp> {
        self.ops.iter().find(|op| op.text() == Some(text))
    }
}

impl DrawingSurface for DisplayList {
    fn fill_background(&mut self, color: Rgb) {
        self.ops.push(DrawOp::FillBackground { color });
    }

    fn draw_rect(&mut self, rect: Rect, stroke: Stroke) {
        self.ops.push(DrawOp::Rect { rect, stroke });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            left: style.left_edge(text, x),
            style: *style,
        });
    }

    fn draw_rotated_text(&mut self, text: &str, x: f32, y: f32, angle_deg: f32, style: &TextStyle) {
        self.ops.push(DrawOp::RotatedText {
            text: text.to_string(),
            x,
            y,
            angle_deg,
            style: *style,
        });
    }
}
