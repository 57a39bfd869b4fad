// Shared helpers for integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use dochi_bonds_wasm::models::{CertificateNumber, InvestmentRecord, Issuance};

pub fn asha_rao() -> InvestmentRecord {
    InvestmentRecord::new(
        "Asha Rao",
        "ABCDE1234F",
        "5000",
        "Delhi-Mumbai Smart Expressway",
        "0xAB12CD34EF",
    )
}

pub fn fixed_issuance() -> Issuance {
    Issuance::new(
        CertificateNumber::new(4217).unwrap(),
        NaiveDate::from_ymd_opt(2025, 1, 26).unwrap(),
    )
}

/// Decode every `(...) Tj` string operand of the content stream, in order
pub fn pdf_text_runs(pdf: &[u8]) -> Vec<String> {
    let text: String = pdf.iter().map(|&b| b as char).collect();
    let start = text.find("stream\n").expect("content stream") + "stream\n".len();
    let end = text[start..].find("\nendstream").expect("end of stream") + start;
    let stream: Vec<char> = text[start..end].chars().collect();

    let mut runs = Vec::new();
    let mut i = 0;
    while i < stream.len() {
        if stream[i] != '(' {
            i += 1;
            continue;
        }
        i += 1;
        let mut run = String::new();
        while i < stream.len() && stream[i] != ')' {
            if stream[i] == '\\' {
                i += 1;
                if stream[i].is_digit(8) {
                    let octal: String = stream[i..i + 3].iter().collect();
                    run.push(u8::from_str_radix(&octal, 8).unwrap() as char);
                    i += 3;
                    continue;
                }
            }
            run.push(stream[i]);
            i += 1;
        }
        runs.push(run);
        i += 1;
    }
    runs
}

/// All text of the page joined with single spaces
pub fn pdf_text(pdf: &[u8]) -> String {
    pdf_text_runs(pdf).join(" ")
}
