//! WorkSession - One employee's shift for one calendar day
//!
//! Exactly one session per (employee, date). Declaring new hours replaces
//! the derived goals in place; progress counters survive the overwrite.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Daily work session with goal targets and progress counters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkSession {
    pub id: Uuid,
    pub user_id: Uuid,
    pub session_date: NaiveDate,
    /// Declared shift length, > 0
    pub work_hours: f64,
    /// Revenue target derived from work hours (informational only)
    pub goal_amount: f64,
    pub goal_paid_memberships: i32,
    pub goal_credit_cards: i32,
    pub current_paid_memberships: i32,
    pub current_credit_cards: i32,
    /// Revenue accumulated during this shift
    pub revenue: f64,
    /// Recomputed after every sale and every admin count update
    pub goal_met: bool,
}
