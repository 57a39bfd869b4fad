// Investment flow integration tests
//
// Project pick -> KYC -> payment -> certificate and portfolio receipt,
// backed by the in-memory identity and store.

mod common;

use chrono::{Local, TimeZone, Utc};
use dochi_bonds_wasm::catalog::find_project;
use dochi_bonds_wasm::certificate::{generate_receipt, CertificateGenerator};
use dochi_bonds_wasm::flow::{FlowError, FlowStep, InvestmentFlow, KycDetails};
use dochi_bonds_wasm::models::format_issuance_date;
use dochi_bonds_wasm::store::{InvestmentStore, MemoryStore, SessionIdentity};

fn kyc(amount: &str) -> KycDetails {
    KycDetails {
        name: "Asha Rao".to_string(),
        aadhar: "1234 5678 9012".to_string(),
        pan: "abcde1234f".to_string(),
        amount: amount.to_string(),
    }
}

#[test]
fn test_full_investment_to_certificate() {
    let identity = SessionIdentity::signed_in("uid-asha", "asha@example.com");
    let mut store = MemoryStore::new();
    let paid_at = Utc.with_ymd_and_hms(2025, 1, 26, 10, 30, 0).unwrap();
    store.set_clock(paid_at);

    let mut flow = InvestmentFlow::new(1).unwrap();
    let project_name = flow.project().name.clone();
    flow.submit_kyc(kyc("5000")).unwrap();
    assert_eq!(flow.step(), FlowStep::Payment);

    let completed = flow.complete_payment(&identity, &mut store).unwrap().clone();
    assert_eq!(flow.step(), FlowStep::Success);
    assert_eq!(completed.record.name, "Asha Rao");
    assert_eq!(completed.record.pan, "ABCDE1234F");
    assert_eq!(completed.record.project_name, project_name);
    assert!(completed.record.tx_hash.starts_with("0x"));

    let certificate = flow.certificate(&CertificateGenerator::new()).unwrap();
    assert_eq!(certificate.pdf.filename, "Bond_Asha_Rao.pdf");
    let text = common::pdf_text(&certificate.pdf.bytes);
    assert!(text.contains("ASHA RAO"));
    assert!(text.contains(&completed.record.tx_hash));
    assert!(text.contains("INR 5000"));

    // Portfolio view
    let rows = store.investments_for_user("uid-asha").unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, completed.investment_id);
    assert_eq!(rows[0].investment.user_email, "asha@example.com");

    let receipt = generate_receipt(&rows[0]);
    assert_eq!(receipt.filename, format!("{}_Bond.pdf", project_name));
    let runs = common::pdf_text_runs(&receipt.bytes);
    let local_date = format_issuance_date(paid_at.with_timezone(&Local).date_naive());
    assert!(runs.iter().any(|r| r == &format!("Date: {}", local_date)));
    assert!(runs.iter().any(|r| r == &format!("Transaction Hash: {}", completed.record.tx_hash)));
}

#[test]
fn test_amount_below_minimum_stays_on_kyc() {
    let project = find_project(1).unwrap();
    let mut flow = InvestmentFlow::new(project.id).unwrap();

    let below = (project.min_investment() as u64 - 1).to_string();
    assert!(matches!(flow.submit_kyc(kyc(&below)), Err(FlowError::Kyc(_))));
    assert_eq!(flow.step(), FlowStep::Kyc);
}

#[test]
fn test_payment_requires_sign_in() {
    let identity = SessionIdentity::signed_out();
    let mut store = MemoryStore::new();

    let mut flow = InvestmentFlow::new(2).unwrap();
    flow.submit_kyc(kyc("2500")).unwrap();

    assert!(matches!(
        flow.complete_payment(&identity, &mut store),
        Err(FlowError::NotSignedIn)
    ));
    assert_eq!(flow.step(), FlowStep::Payment);
    assert!(store.is_empty());
}

#[test]
fn test_store_failure_allows_retry() {
    let identity = SessionIdentity::signed_in("uid-ravi", "ravi@example.com");
    let mut store = MemoryStore::new();
    store.set_offline(true);

    let mut flow = InvestmentFlow::new(3).unwrap();
    flow.submit_kyc(kyc("1000")).unwrap();
    assert!(matches!(
        flow.complete_payment(&identity, &mut store),
        Err(FlowError::Store(_))
    ));
    assert_eq!(flow.step(), FlowStep::Payment);

    store.set_offline(false);
    flow.complete_payment(&identity, &mut store).unwrap();
    assert_eq!(flow.step(), FlowStep::Success);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_certificate_before_payment_is_rejected() {
    let mut flow = InvestmentFlow::new(1).unwrap();
    flow.submit_kyc(kyc("5000")).unwrap();

    assert!(matches!(
        flow.certificate(&CertificateGenerator::new()),
        Err(FlowError::InvalidTransition { step: FlowStep::Payment, .. })
    ));
}
