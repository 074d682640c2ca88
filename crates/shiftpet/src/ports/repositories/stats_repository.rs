//! Stats Repository Port
//!
//! Abstract interface for AnimalStats persistence.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{errors::DomainError, AnimalStats};

/// Repository interface for AnimalStats
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Find stats for an employee
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<AnimalStats>, DomainError>;

    /// Insert a fresh stats row (lazy creation on first login)
    async fn insert(&self, stats: &AnimalStats) -> Result<AnimalStats, DomainError>;

    /// Persist a decay pass: the new health and the advanced reset date.
    /// Must not touch `last_fed`.
    async fn record_decay(
        &self,
        user_id: Uuid,
        health: i32,
        reset_date: NaiveDate,
    ) -> Result<(), DomainError>;
}
