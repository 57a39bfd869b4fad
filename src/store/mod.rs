//! Identity and persistence interfaces
//!
//! Authentication and the investment database are external services. The
//! flow only needs the two narrow traits below; [`SessionIdentity`] and
//! [`MemoryStore`] back tests and offline demos.

pub mod memory;

use thiserror::Error;

use crate::models::{InvestmentRow, NewInvestment, User};

pub use memory::{MemoryStore, SessionIdentity};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The backing service could not be reached
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The write or query was refused
    #[error("Store rejected the request: {0}")]
    Rejected(String),
}

/// Source of the currently signed-in user
pub trait IdentityProvider {
    fn current_user(&self) -> Option<User>;
}

/// Investment persistence
pub trait InvestmentStore {
    /// Persist an investment and return its assigned id
    fn add_investment(&mut self, investment: NewInvestment) -> Result<String, StoreError>;

    /// All investments of `user_id`, newest first
    fn investments_for_user(&self, user_id: &str) -> Result<Vec<InvestmentRow>, StoreError>;
}
