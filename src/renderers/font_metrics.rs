//! Advance widths for the standard Times faces
//!
//! Widths are the AFM values of the PDF base-14 `Times-Roman` and
//! `Times-Bold` fonts, in 1/1000 em, indexed by `char - 0x20` for the
//! printable ASCII range. Characters outside that range are encoded as
//! `?` by the PDF backend unless WinAnsi has a slot for them, and are
//! measured as `?` either way.

use super::surface::FontFace;

/// Millimetres per PostScript point
pub const MM_PER_PT: f32 = 25.4 / 72.0;

#[rustfmt::skip]
const TIMES_ROMAN_WIDTHS: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    // 0-9
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
    // : ; < = > ? @
    278, 278, 564, 564, 564, 444, 921,
    // A-Z
    722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889,
    722, 722, 556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611,
    // [ \ ] ^ _ `
    333, 278, 333, 469, 500, 333,
    // a-z
    444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778,
    500, 500, 500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444,
    // { | } ~
    480, 200, 480, 541,
];

#[rustfmt::skip]
const TIMES_BOLD_WIDTHS: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
    333, 333, 570, 570, 570, 500, 930,
    722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944,
    722, 778, 611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667,
    333, 278, 333, 581, 500, 333,
    500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833,
    556, 500, 556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444,
    394, 220, 394, 520,
];

fn widths(face: FontFace) -> &'static [u16; 95] {
    match face {
        FontFace::Regular => &TIMES_ROMAN_WIDTHS,
        FontFace::Bold => &TIMES_BOLD_WIDTHS,
    }
}

/// Advance width of one character in 1/1000 em
pub fn char_width_units(c: char, face: FontFace) -> u16 {
    let table = widths(face);
    let index = match c {
        ' '..='~' => c as usize - 0x20,
        _ => '?' as usize - 0x20,
    };
    table[index]
}

/// Advance width of a whole run in 1/1000 em
pub fn text_width_units(text: &str, face: FontFace) -> u32 {
    text.chars().map(|c| char_width_units(c, face) as u32).sum()
}

/// Rendered width of `text` in millimetres at `size_pt`
pub fn text_width_mm(text: &str, face: FontFace, size_pt: f32) -> f32 {
    text_width_units(text, face) as f32 * size_pt / 1000.0 * MM_PER_PT
}
