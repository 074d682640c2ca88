//! Sale Repository Port
//!
//! The compound sale mutation: ledger append plus session and stats
//! updates, atomic as a unit.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::{errors::DomainError, AnimalStats, Sale, SaleEvent, WorkSession};

/// The post-sale state returned to the caller
#[derive(Debug, Clone)]
pub struct SaleApplied {
    pub sale: Sale,
    pub stats: AnimalStats,
    pub session: WorkSession,
}

/// Repository interface for the sale ledger
#[async_trait]
pub trait SaleRepository: Send + Sync {
    /// Atomically append the sale to the ledger, fold it into the day's
    /// session (counter increments must happen in-place at the store, not
    /// read-modify-write), recompute goal_met and happiness, and apply the
    /// health bonus with `last_fed = now`. Any step failing rolls back the
    /// whole sale.
    async fn apply_sale(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        sale: &SaleEvent,
        now: DateTime<Utc>,
    ) -> Result<SaleApplied, DomainError>;
}
