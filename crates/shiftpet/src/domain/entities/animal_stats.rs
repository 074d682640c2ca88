//! AnimalStats - Pet health/happiness state
//!
//! One row per employee, created lazily on first login. Health and
//! happiness are always clamped to [0, 100]; total revenue only grows.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Pet stats for one employee
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimalStats {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Current health, 0..=100
    pub health: i32,
    /// Current happiness, 0..=100
    pub happiness: i32,
    /// Cumulative revenue across all days, monotonic non-decreasing
    pub total_revenue: f64,
    /// Last time the pet was fed (a sale was recorded)
    pub last_fed: DateTime<Utc>,
    /// Business date the health decay bookkeeping last advanced to
    pub last_health_reset: Option<NaiveDate>,
    pub updated_at: DateTime<Utc>,
}

impl AnimalStats {
    /// Default stats for a freshly adopted pet
    pub fn new_for_user(user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            health: 100,
            happiness: 100,
            total_revenue: 0.0,
            last_fed: now,
            last_health_reset: None,
            updated_at: now,
        }
    }
}
