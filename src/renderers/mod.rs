//! Renderers module for Dochi Bonds
//!
//! Backend-neutral drawing primitives plus the two surfaces layouts are
//! drawn onto: a PDF writer and a recording display list.

pub mod surface;
pub mod font_metrics;
pub mod text_wrap;
pub mod display_list;
pub mod pdf;

// Re-export commonly used types
pub use surface::{DrawingSurface, FontFace, PageSize, Rect, Rgb, Stroke, TextAlign, TextStyle};
pub use font_metrics::text_width_mm;
pub use text_wrap::wrap_text;
pub use display_list::{DisplayList, DrawOp};
pub use pdf::PdfSurface;
