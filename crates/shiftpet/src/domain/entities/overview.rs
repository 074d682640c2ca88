//! PetOverviewRow - Admin fleet overview projection

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::AnimalChoice;

/// One employee's pet as seen on the admin overview: the employee row
/// left-joined with today's stats and session-existence flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetOverviewRow {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub animal_choice: AnimalChoice,
    pub health: i32,
    pub happiness: i32,
    pub total_revenue: f64,
    pub last_fed: DateTime<Utc>,
    pub last_health_reset: Option<NaiveDate>,
    pub has_session_today: bool,
}
