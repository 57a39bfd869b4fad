//! In-memory identity session and investment store

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{IdentityProvider, InvestmentStore, StoreError};
use crate::models::{InvestmentRow, NewInvestment, User};

/// Signed-in user held in memory
#[derive(Debug, Clone, Default)]
pub struct SessionIdentity {
    user: Option<User>,
}

impl SessionIdentity {
    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn signed_in(uid: impl Into<String>, email: impl Into<String>) -> Self {
        let mut session = Self::default();
        session.sign_in(uid, email);
        session
    }

    pub fn sign_in(&mut self, uid: impl Into<String>, email: impl Into<String>) {
        self.user = Some(User {
            uid: uid.into(),
            email: email.into(),
        });
    }

    pub fn sign_out(&mut self) {
        self.user = None;
    }
}

impl IdentityProvider for SessionIdentity {
    fn current_user(&self) -> Option<User> {
        self.user.clone()
    }
}

/// Volatile investment store.
///
/// Rows are stamped with the store's clock, which tests can pin with
/// [`MemoryStore::set_clock`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Vec<InvestmentRow>,
    clock: Option<DateTime<Utc>>,
    offline: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed creation timestamp for every new row
    pub fn set_clock(&mut self, now: DateTime<Utc>) {
        self.clock = Some(now);
    }

    /// Make every call fail with [`StoreError::Unavailable`]
    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.offline {
            return Err(StoreError::Unavailable("memory store is offline".to_string()));
        }
        Ok(())
    }
}

impl InvestmentStore for MemoryStore {
    fn add_investment(&mut self, investment: NewInvestment) -> Result<String, StoreError> {
        self.check_online()?;

        let id = Uuid::new_v4().to_string();
        self.rows.push(InvestmentRow {
            id: id.clone(),
            investment,
            created_at: self.clock.unwrap_or_else(Utc::now),
        });
        Ok(id)
    }

    fn investments_for_user(&self, user_id: &str) -> Result<Vec<InvestmentRow>, StoreError> {
        self.check_online()?;

        let mut rows: Vec<InvestmentRow> = self
            .rows
            .iter()
            .filter(|row| row.investment.user_id == user_id)
            .cloned()
            .collect();
        // Stable sort: rows written in the same instant keep reverse insertion order
        rows.reverse();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;
    use chrono::TimeZone;

    fn investment(user: &str, project: &str) -> NewInvestment {
        NewInvestment {
            user_id: user.to_string(),
            user_email: format!("{}@example.com", user),
            project_id: 1,
            project_name: project.to_string(),
            amount: Amount::from("5000"),
            aadhar: "123412341234".to_string(),
            pan: "ABCDE1234F".to_string(),
            name: "Asha Rao".to_string(),
            tx_hash: "0xAB12CD34EF".to_string(),
        }
    }

    #[test]
    fn test_sign_in_and_out() {
        let mut session = SessionIdentity::signed_out();
        assert!(session.current_user().is_none());
        session.sign_in("u1", "asha@example.com");
        assert_eq!(session.current_user().unwrap().uid, "u1");
        session.sign_out();
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_query_filters_by_user_newest_first() {
        let mut store = MemoryStore::new();
        store.set_clock(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        store.add_investment(investment("u1", "old")).unwrap();
        store.add_investment(investment("u2", "other user")).unwrap();
        store.set_clock(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
        store.add_investment(investment("u1", "new")).unwrap();

        let rows = store.investments_for_user("u1").unwrap();
        let names: Vec<&str> = rows.iter().map(|r| r.investment.project_name.as_str()).collect();
        assert_eq!(names, vec!["new", "old"]);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut store = MemoryStore::new();
        let a = store.add_investment(investment("u1", "a")).unwrap();
        let b = store.add_investment(investment("u1", "b")).unwrap();
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_offline_store_fails() {
        let mut store = MemoryStore::new();
        store.set_offline(true);
        assert!(matches!(
            store.add_investment(investment("u1", "a")),
            Err(StoreError::Unavailable(_))
        ));
        assert!(store.is_empty());
    }
}
