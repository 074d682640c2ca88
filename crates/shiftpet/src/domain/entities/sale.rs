//! Sale - Append-only sale ledger entry

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recorded sale. Never mutated after insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    pub id: Uuid,
    pub user_id: Uuid,
    pub session_date: NaiveDate,
    pub revenue: f64,
    pub has_credit_card: bool,
    pub has_paid_membership: bool,
    pub has_warranty: bool,
    /// The submitter explicitly confirmed an unusually large amount.
    /// Ledger metadata only; nothing computes from it.
    pub overridden_high_value: bool,
    pub created_at: DateTime<Utc>,
}

/// An incoming sale event, before it lands on the ledger
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaleEvent {
    pub revenue: f64,
    pub has_credit_card: bool,
    pub has_paid_membership: bool,
    pub has_warranty: bool,
    pub overridden_high_value: bool,
}

impl SaleEvent {
    /// A plain cash sale with no attachments
    pub fn plain(revenue: f64) -> Self {
        Self {
            revenue,
            has_credit_card: false,
            has_paid_membership: false,
            has_warranty: false,
            overridden_high_value: false,
        }
    }
}
