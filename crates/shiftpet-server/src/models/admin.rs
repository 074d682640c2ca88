//! Admin DTOs: fleet overview, manual reset, count corrections

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shiftpet::PetOverviewRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One employee's pet on the admin overview
#[derive(Debug, Serialize, ToSchema)]
pub struct PetBody {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub animal_choice: String,
    pub health: i32,
    pub happiness: i32,
    pub total_revenue: f64,
    pub last_fed: DateTime<Utc>,
    pub last_health_reset: Option<NaiveDate>,
    pub has_session_today: bool,
}

impl From<PetOverviewRow> for PetBody {
    fn from(row: PetOverviewRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            name: row.name,
            animal_choice: row.animal_choice.to_string(),
            health: row.health,
            happiness: row.happiness,
            total_revenue: row.total_revenue,
            last_fed: row.last_fed,
            last_health_reset: row.last_health_reset,
            has_session_today: row.has_session_today,
        }
    }
}

/// Fleet-wide rollup
#[derive(Debug, Serialize, ToSchema)]
pub struct OverviewSummary {
    pub total_employees: usize,
    pub active_today: usize,
    pub avg_health: f64,
    pub avg_happiness: f64,
}

/// Admin overview response
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminOverviewResponse {
    pub success: bool,
    pub pets: Vec<PetBody>,
    pub summary: OverviewSummary,
}

/// Manual workday reset trigger
#[derive(Debug, Deserialize, ToSchema)]
pub struct AdminResetRequest {
    pub admin_user_id: Uuid,
}

/// Manual reset confirmation
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminResetResponse {
    pub success: bool,
    pub reset_date: NaiveDate,
}

/// Admin count correction; at least one of the two counts is required
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCountsRequest {
    pub admin_user_id: Uuid,
    pub target_user_id: Uuid,
    pub credit_cards: Option<i32>,
    pub paid_memberships: Option<i32>,
}

/// Updated counters and the recomputed happiness
#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateCountsResponse {
    pub success: bool,
    pub current_credit_cards: i32,
    pub current_paid_memberships: i32,
    pub happiness: i32,
}
