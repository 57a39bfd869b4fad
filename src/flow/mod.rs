//! Investment flow
//!
//! The three-step wizard a user goes through after picking a project:
//!
//! ```text
//! Kyc --submit_kyc--> Payment --complete_payment--> Success
//!  ^                     |
//!  +-----edit_amount-----+
//! ```
//!
//! The flow is not persisted. Only a successful payment writes anything,
//! and only through the [`InvestmentStore`] it is handed.

pub mod kyc;
pub mod tx_hash;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::catalog::find_project;
use crate::certificate::{CertificateGenerator, GeneratedCertificate};
use crate::errors::CertificateError;
use crate::models::{Amount, InvestmentRecord, NewInvestment, Project};
use crate::store::{IdentityProvider, InvestmentStore, StoreError};

pub use kyc::{KycDetails, KycError};
pub use tx_hash::generate_tx_hash;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowStep {
    Kyc,
    Payment,
    Success,
}

impl fmt::Display for FlowStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FlowStep::Kyc => "kyc",
            FlowStep::Payment => "payment",
            FlowStep::Success => "success",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("Unknown project id {0}")]
    UnknownProject(u32),

    #[error("Cannot {action} during the {step} step")]
    InvalidTransition { step: FlowStep, action: &'static str },

    #[error("KYC check failed: {0}")]
    Kyc(#[from] KycError),

    #[error("Sign in to complete the investment")]
    NotSignedIn,

    #[error("Transaction failed to record: {0}")]
    Store(#[from] StoreError),

    #[error(transparent)]
    Certificate(#[from] CertificateError),
}

/// State of one user's way through the wizard for one project
#[derive(Debug, Clone)]
pub struct InvestmentFlow {
    project: Project,
    step: FlowStep,
    kyc: KycDetails,
    completed: Option<CompletedInvestment>,
}

/// What a successful payment leaves behind
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedInvestment {
    pub investment_id: String,
    pub record: InvestmentRecord,
}

impl InvestmentFlow {
    /// Start a flow for a catalogue project
    pub fn new(project_id: u32) -> Result<Self, FlowError> {
        let project = find_project(project_id).ok_or(FlowError::UnknownProject(project_id))?;
        Ok(Self::for_project(project.clone()))
    }

    /// Start a flow with the amount pre-filled to the project minimum
    pub fn for_project(project: Project) -> Self {
        let kyc = KycDetails {
            amount: project.min_invest_digits(),
            ..KycDetails::default()
        };
        Self {
            project,
            step: FlowStep::Kyc,
            kyc,
            completed: None,
        }
    }

    pub fn step(&self) -> FlowStep {
        self.step
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    /// KYC details as last submitted (or pre-filled)
    pub fn kyc(&self) -> &KycDetails {
        &self.kyc
    }

    pub fn completed(&self) -> Option<&CompletedInvestment> {
        self.completed.as_ref()
    }

    fn expect_step(&self, step: FlowStep, action: &'static str) -> Result<(), FlowError> {
        if self.step != step {
            return Err(FlowError::InvalidTransition {
                step: self.step,
                action,
            });
        }
        Ok(())
    }

    /// Validate the KYC form and move on to payment
    pub fn submit_kyc(&mut self, details: KycDetails) -> Result<(), FlowError> {
        self.expect_step(FlowStep::Kyc, "submit KYC details")?;
        self.kyc = details.validated(self.project.min_investment())?;
        self.step = FlowStep::Payment;
        log::debug!("KYC accepted for project {}", self.project.id);
        Ok(())
    }

    /// Go back from payment to the KYC form, keeping what was entered
    pub fn edit_amount(&mut self) -> Result<(), FlowError> {
        self.expect_step(FlowStep::Payment, "edit the amount")?;
        self.step = FlowStep::Kyc;
        Ok(())
    }

    /// Record the investment and finish the flow.
    ///
    /// A transaction hash is generated here, before the row is written. If
    /// the store refuses the write the flow stays on the payment step and
    /// can be retried.
    pub fn complete_payment<I, S>(&mut self, identity: &I, store: &mut S) -> Result<&CompletedInvestment, FlowError>
    where
        I: IdentityProvider + ?Sized,
        S: InvestmentStore + ?Sized,
    {
        self.expect_step(FlowStep::Payment, "complete the payment")?;
        let user = identity.current_user().ok_or(FlowError::NotSignedIn)?;
        let tx_hash = generate_tx_hash()?;

        let investment = NewInvestment {
            user_id: user.uid,
            user_email: user.email,
            project_id: self.project.id,
            project_name: self.project.name.clone(),
            amount: Amount::Text(self.kyc.amount.clone()),
            aadhar: self.kyc.aadhar.clone(),
            pan: self.kyc.pan.clone(),
            name: self.kyc.name.clone(),
            tx_hash,
        };
        let record = investment.to_record();

        let investment_id = store.add_investment(investment).map_err(|e| {
            log::error!("Error saving investment: {}", e);
            e
        })?;

        log::info!(
            "Investment {} recorded for project {} ({})",
            investment_id,
            self.project.id,
            record.tx_hash
        );

        self.step = FlowStep::Success;
        Ok(&*self.completed.insert(CompletedInvestment {
            investment_id,
            record,
        }))
    }

    /// Certificate for the completed investment
    pub fn certificate(&self, generator: &CertificateGenerator) -> Result<GeneratedCertificate, FlowError> {
        self.expect_step(FlowStep::Success, "download the certificate")?;
        let completed = self.completed.as_ref().ok_or(FlowError::InvalidTransition {
            step: self.step,
            action: "download the certificate",
        })?;
        Ok(generator.generate(&completed.record)?)
    }
}
