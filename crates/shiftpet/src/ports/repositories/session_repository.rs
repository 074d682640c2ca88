//! Session Repository Port
//!
//! Abstract interface for WorkSession persistence.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{errors::DomainError, SessionGoals, WorkSession};

/// Repository interface for WorkSession rows
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// The employee's session for `date`, if the shift has started
    async fn find_for_date(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<WorkSession>, DomainError>;

    /// Create the session for `date`, or overwrite hours and goals in place
    /// when one already exists. Progress counters and revenue survive the
    /// overwrite.
    async fn upsert_goals(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        work_hours: f64,
        goals: &SessionGoals,
    ) -> Result<WorkSession, DomainError>;

    /// Admin correction, atomic as a unit: overwrite the day's counters
    /// (not increment), recompute goal_met, and write the recomputed
    /// happiness onto the pet's stats. `None` leaves a counter untouched.
    /// Returns the updated session and the happiness that was written.
    async fn correct_counts(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        credit_cards: Option<i32>,
        paid_memberships: Option<i32>,
    ) -> Result<(WorkSession, i32), DomainError>;
}
