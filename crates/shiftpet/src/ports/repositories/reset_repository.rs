//! Reset Repository Port
//!
//! The daily workday reset: a single atomic mutation across stats,
//! sessions, sales, and the global marker row.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::{errors::DomainError, DailyResetMarker};

/// Repository interface for the daily reset lifecycle
#[async_trait]
pub trait ResetRepository: Send + Sync {
    /// The last recorded automatic reset, if any
    async fn last_reset(&self) -> Result<Option<DailyResetMarker>, DomainError>;

    /// Perform the workday reset in one transaction: every pet to
    /// health 100 / happiness 0 / last_fed `now` / reset date `today`,
    /// delete `today`'s sessions and sales, stamp the marker. Idempotent:
    /// running it twice in the same window changes nothing further.
    async fn perform_reset(
        &self,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<DailyResetMarker, DomainError>;
}
