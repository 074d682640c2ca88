//! DailyResetMarker - Last automatic workday reset
//!
//! A single global row. Read on every login; the reset operation itself is
//! idempotent, so a race between concurrent logins causes redundant work at
//! worst, never corruption.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Date and timestamp of the last automatic reset
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DailyResetMarker {
    pub reset_date: NaiveDate,
    pub reset_at: DateTime<Utc>,
}
