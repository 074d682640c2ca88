//! Shift DTOs: session start/read and sale recording

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shiftpet::WorkSession;
use utoipa::ToSchema;
use uuid::Uuid;

/// Start-of-shift declaration
#[derive(Debug, Deserialize, ToSchema)]
pub struct StartSessionRequest {
    pub user_id: Uuid,
    pub work_hours: f64,
}

/// Goals derived from the declared hours
#[derive(Debug, Serialize, ToSchema)]
pub struct StartSessionResponse {
    pub success: bool,
    pub work_hours: f64,
    pub goal_amount: f64,
    pub goal_paid_memberships: i32,
    pub goal_credit_cards: i32,
}

/// Today's work session as stored
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionBody {
    pub id: Uuid,
    pub user_id: Uuid,
    pub session_date: NaiveDate,
    pub work_hours: f64,
    pub goal_amount: f64,
    pub goal_paid_memberships: i32,
    pub goal_credit_cards: i32,
    pub current_paid_memberships: i32,
    pub current_credit_cards: i32,
    pub revenue: f64,
    pub goal_met: bool,
}

impl From<WorkSession> for SessionBody {
    fn from(session: WorkSession) -> Self {
        Self {
            id: session.id,
            user_id: session.user_id,
            session_date: session.session_date,
            work_hours: session.work_hours,
            goal_amount: session.goal_amount,
            goal_paid_memberships: session.goal_paid_memberships,
            goal_credit_cards: session.goal_credit_cards,
            current_paid_memberships: session.current_paid_memberships,
            current_credit_cards: session.current_credit_cards,
            revenue: session.revenue,
            goal_met: session.goal_met,
        }
    }
}

/// Session response
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub success: bool,
    pub session: SessionBody,
}

/// A sale to record. The attach flags and the high-value override default
/// to false when omitted.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RecordSaleRequest {
    pub user_id: Uuid,
    pub revenue: f64,
    #[serde(default)]
    pub has_credit_card: bool,
    #[serde(default)]
    pub has_paid_membership: bool,
    #[serde(default)]
    pub has_warranty: bool,
    #[serde(default)]
    pub overridden_high_value: bool,
}

/// Post-sale state projection
#[derive(Debug, Serialize, ToSchema)]
pub struct RecordSaleResponse {
    pub success: bool,
    pub health: i32,
    pub happiness: i32,
    pub total_revenue: f64,
    pub goal_met: bool,
    pub message: String,
}
