//! PDF string literal encoding
//!
//! Text is written with the standard fonts' WinAnsiEncoding. Bytes above
//! 0x7F are emitted as octal escapes so the content stream stays ASCII.

/// WinAnsi code for `c`, or `?` when the encoding has no slot for it
pub fn win_ansi_byte(c: char) -> u8 {
    match c {
        ' '..='~' => c as u8,
        '\u{A0}'..='\u{FF}' => c as u32 as u8,
        '€' => 0x80,
        '…' => 0x85,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '™' => 0x99,
        _ => b'?',
    }
}

/// Append `text` as a parenthesised PDF string literal
pub fn push_pdf_string(out: &mut String, text: &str) {
    out.push('(');
    for c in text.chars() {
        match win_ansi_byte(c) {
            b'\\' => out.push_str("\\\\"),
            b'(' => out.push_str("\\("),
            b')' => out.push_str("\\)"),
            byte if byte >= 0x80 => out.push_str(&format!("\\{:03o}", byte)),
            byte => out.push(byte as char),
        }
    }
    out.push(')');
}
