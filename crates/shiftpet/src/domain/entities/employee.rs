//! Employee - Provisioned staff identity
//!
//! Pure domain entity without infrastructure dependencies. Employees are
//! created externally (HR provisioning); only the pet species is mutable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::AnimalChoice;

/// Employee account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub animal_choice: AnimalChoice,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}
