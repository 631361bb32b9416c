//! Billing domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SESSION_COUNT;
use crate::errors::Result;
use crate::settings::SessionCountPolicy;
use crate::utils::BillingPeriod;

/// Sessions held by one professional with one child in a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub count: Option<i64>,
}

impl SessionRecord {
    pub fn with_count(count: i64) -> Self {
        SessionRecord { count: Some(count) }
    }

    /// Number of sessions this record stands for under `policy`.
    pub fn sessions(&self, policy: SessionCountPolicy) -> i64 {
        match (self.count, policy) {
            (None, _) => DEFAULT_SESSION_COUNT,
            (Some(0), SessionCountPolicy::Legacy) => DEFAULT_SESSION_COUNT,
            (Some(count), _) => count,
        }
    }
}

/// Either a pre-aggregated session count or the individual records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SessionInput {
    Count(i64),
    Records(Vec<SessionRecord>),
}

impl From<i64> for SessionInput {
    fn from(count: i64) -> Self {
        SessionInput::Count(count)
    }
}

impl From<Vec<SessionRecord>> for SessionInput {
    fn from(records: Vec<SessionRecord>) -> Self {
        SessionInput::Records(records)
    }
}

/// A session row as kept by the clinic's data store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEntry {
    pub id: String,
    pub professional_id: String,
    pub child_id: String,
    pub month: u32,
    pub year: i32,
    pub count: Option<i64>,
    pub module_value: Decimal,
}

impl SessionEntry {
    pub fn record(&self) -> SessionRecord {
        SessionRecord { count: self.count }
    }
}

/// Billed amount for one professional and one child in a month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyFigure {
    pub professional_id: String,
    pub child_id: String,
    pub month: u32,
    pub year: i32,
    pub session_count: i64,
    pub module_value: Decimal,
    pub total_amount: Decimal,
}

impl MonthlyFigure {
    pub fn period(&self) -> Result<BillingPeriod> {
        BillingPeriod::new(self.month, self.year)
    }
}
