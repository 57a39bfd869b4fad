//! Persisted investments and the identity that owns them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::record::{Amount, InvestmentRecord};

/// Signed-in user as reported by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub uid: String,
    pub email: String,
}

/// Investment about to be written to the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestment {
    pub user_id: String,
    pub user_email: String,
    pub project_id: u32,
    pub project_name: String,
    pub amount: Amount,
    pub aadhar: String,
    pub pan: String,
    pub name: String,
    pub tx_hash: String,
}

/// Investment row as returned by the store, with its assigned id and
/// server-side creation timestamp.
///
/// `createdAt` is also read from `timestamp`, either as an RFC 3339 string
/// or as a `{ seconds, nanoseconds }` object. A row whose server timestamp
/// has not resolved yet (null or missing) is dated now.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentRow {
    pub id: String,
    #[serde(flatten)]
    pub investment: NewInvestment,
    #[serde(alias = "timestamp", default = "Utc::now", deserialize_with = "created_at_or_now")]
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredTimestamp {
    Rfc3339(DateTime<Utc>),
    Seconds {
        seconds: i64,
        #[serde(default)]
        nanoseconds: u32,
    },
}

fn created_at_or_now<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    let stored = Option::<StoredTimestamp>::deserialize(deserializer)?;
    Ok(match stored {
        Some(StoredTimestamp::Rfc3339(at)) => at,
        Some(StoredTimestamp::Seconds { seconds, nanoseconds }) => {
            DateTime::from_timestamp(seconds, nanoseconds).unwrap_or_else(Utc::now)
        }
        None => Utc::now(),
    })
}

impl NewInvestment {
    pub fn to_record(&self) -> InvestmentRecord {
        InvestmentRecord {
            name: self.name.clone(),
            pan: self.pan.clone(),
            amount: self.amount.clone(),
            project_name: self.project_name.clone(),
            tx_hash: self.tx_hash.clone(),
        }
    }
}

impl InvestmentRow {
    pub fn to_record(&self) -> InvestmentRecord {
        self.investment.to_record()
    }
}
