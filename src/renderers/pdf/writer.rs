//! PDF 1.4 file assembly
//!
//! Writes a single-page document with the two standard Times faces. The
//! object layout is fixed:
//!
//! | id | object |
//! |----|--------|
//! | 1 | Catalog |
//! | 2 | Pages |
//! | 3 | Page |
//! | 4 | Content stream |
//! | 5 | Font `/F1` Times-Roman |
//! | 6 | Font `/F2` Times-Bold |
//! | 7 | Info dictionary |
//!
//! No creation date is written, so identical content gives identical bytes.

use super::encoding::push_pdf_string;

pub const PRODUCER: &str = "Dochi Bonds";

/// Everything needed to serialize one page
pub struct PageContent<'a> {
    pub width_pt: f32,
    pub height_pt: f32,
    pub stream: &'a str,
    pub title: Option<&'a str>,
}

/// Serialize a complete PDF file
pub fn write_pdf(page: &PageContent<'_>) -> Vec<u8> {
    let mut pdf = Vec::new();
    let mut xref_positions: Vec<usize> = Vec::new();

    pdf.extend_from_slice(b"%PDF-1.4\n");
    pdf.extend_from_slice(b"%\xE2\xE3\xCF\xD3\n");

    xref_positions.push(pdf.len());
    pdf.extend_from_slice(b"1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n");

    xref_positions.push(pdf.len());
    pdf.extend_from_slice(b"2 0 obj\n<< /Type /Pages /Kids [3 0 R] /Count 1 >>\nendobj\n");

    xref_positions.push(pdf.len());
    let page_obj = format!(
        "3 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] /Contents 4 0 R /Resources << /Font << /F1 5 0 R /F2 6 0 R >> >> >>\nendobj\n",
        page.width_pt, page.height_pt
    );
    pdf.extend_from_slice(page_obj.as_bytes());

    xref_positions.push(pdf.len());
    let content_obj = format!(
        "4 0 obj\n<< /Length {} >>\nstream\n{}\nendstream\nendobj\n",
        page.stream.len(),
        page.stream
    );
    pdf.extend_from_slice(content_obj.as_bytes());

    for (id, base_font) in [(5, "Times-Roman"), (6, "Times-Bold")] {
        xref_positions.push(pdf.len());
        let font_obj = format!(
            "{} 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>\nendobj\n",
            id, base_font
        );
        pdf.extend_from_slice(font_obj.as_bytes());
    }

    xref_positions.push(pdf.len());
    let mut info = String::from("7 0 obj\n<< /Producer ");
    push_pdf_string(&mut info, PRODUCER);
    if let Some(title) = page.title {
        info.push_str(" /Title ");
        push_pdf_string(&mut info, title);
    }
    info.push_str(" >>\nendobj\n");
    pdf.extend_from_slice(info.as_bytes());

    let xref_start = pdf.len();
    pdf.extend_from_slice(b"xref\n");
    pdf.extend_from_slice(format!("0 {}\n", xref_positions.len() + 1).as_bytes());
    pdf.extend_from_slice(b"0000000000 65535 f \n");
    for pos in &xref_positions {
        pdf.extend_from_slice(format!("{:010} 00000 n \n", pos).as_bytes());
    }

    pdf.extend_from_slice(b"trailer\n");
    pdf.extend_from_slice(
        format!(
            "<< /Size {} /Root 1 0 R /Info 7 0 R >>\n",
            xref_positions.len() + 1
        )
        .as_bytes(),
    );
    pdf.extend_from_slice(b"startxref\n");
    pdf.extend_from_slice(format!("{}\n", xref_start).as_bytes());
    pdf.extend_from_slice(b"%%EOF\n");

    pdf
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<u8> {
        write_pdf(&PageContent {
            width_pt: 595.28,
            height_pt: 841.89,
            stream: "BT /F1 12 Tf 10 10 Td (hi) Tj ET",
            title: Some("Bond_Test"),
        })
    }

    #[test]
    fn test_header_and_trailer() {
        let pdf = sample();
        assert!(pdf.starts_with(b"%PDF-1.4\n"));
        assert!(pdf.ends_with(b"%%EOF\n"));
    }

    fn find(haystack: &[u8], needle: &[u8]) -> usize {
        haystack
            .windows(needle.len())
            .position(|w| w == needle)
            .unwrap()
    }

    #[test]
    fn test_xref_offsets_point_at_objects() {
        let pdf = sample();
        let xref_at = find(&pdf, b"\nxref\n") + 1;
        let table = std::str::from_utf8(&pdf[xref_at..]).unwrap();
        let entries: Vec<usize> = table
            .lines()
            .skip(3)
            .take(7)
            .map(|l| l[..10].parse().unwrap())
            .collect();

        for (i, offset) in entries.iter().enumerate() {
            let expected = format!("{} 0 obj", i + 1);
            assert!(
                pdf[*offset..].starts_with(expected.as_bytes()),
                "xref entry {} does not point at its object",
                i + 1
            );
        }
    }

    #[test]
    fn test_startxref_matches() {
        let pdf = sample();
        let xref_at = find(&pdf, b"\nxref\n") + 1;
        let tail = std::str::from_utf8(&pdf[xref_at..]).unwrap();
        assert!(tail.contains(&format!("startxref\n{}\n", xref_at)));
    }
}
