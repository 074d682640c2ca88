//! Employee-facing DTOs: login, pet stats, pet selection

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Login request
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
}

/// Employee projection returned on login: identity plus current pet stats
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginUser {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub animal_choice: String,
    pub is_admin: bool,
    pub health: i32,
    pub happiness: i32,
    pub total_revenue: f64,
}

/// Login response
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub user: LoginUser,
}

/// Current pet stats
#[derive(Debug, Serialize, ToSchema)]
pub struct StatsBody {
    pub health: i32,
    pub happiness: i32,
    pub last_fed: DateTime<Utc>,
    pub total_revenue: f64,
}

/// Stats response
#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    pub success: bool,
    pub stats: StatsBody,
}

/// Pet change request; the species is validated against the closed set
#[derive(Debug, Deserialize, ToSchema)]
pub struct ChangePetRequest {
    pub user_id: Uuid,
    pub animal_choice: String,
}

/// Pet change response
#[derive(Debug, Serialize, ToSchema)]
pub struct ChangePetResponse {
    pub success: bool,
    pub animal_choice: String,
}
