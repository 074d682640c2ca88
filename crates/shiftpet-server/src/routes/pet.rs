//! Pet Routes - stats lookup and species selection
//!
//! HTTP handlers that delegate to EmployeeService.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{ChangePetRequest, ChangePetResponse, StatsBody, StatsResponse};
use crate::AppState;

/// Current pet stats for an employee
#[utoipa::path(
    get,
    path = "/shiftpet/stats/{user_id}",
    params(("user_id" = Uuid, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Pet stats", body = StatsResponse),
        (status = 404, description = "Stats not found"),
        (status = 500, description = "Store failure")
    ),
    tag = "Pet"
)]
pub async fn get_stats(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<StatsResponse>, ApiError> {
    let stats = state.employee_service.get_stats(user_id).await?;

    Ok(Json(StatsResponse {
        success: true,
        stats: StatsBody {
            health: stats.health,
            happiness: stats.happiness,
            last_fed: stats.last_fed,
            total_revenue: stats.total_revenue,
        },
    }))
}

/// Change the employee's pet species
#[utoipa::path(
    post,
    path = "/shiftpet/pet",
    request_body = ChangePetRequest,
    responses(
        (status = 200, description = "Pet changed", body = ChangePetResponse),
        (status = 400, description = "Invalid animal choice"),
        (status = 404, description = "Unknown employee"),
        (status = 500, description = "Store failure")
    ),
    tag = "Pet"
)]
pub async fn change_pet(
    State(state): State<AppState>,
    Json(payload): Json<ChangePetRequest>,
) -> Result<Json<ChangePetResponse>, ApiError> {
    let choice = state
        .employee_service
        .change_pet(payload.user_id, &payload.animal_choice)
        .await?;

    Ok(Json(ChangePetResponse {
        success: true,
        animal_choice: choice.to_string(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/shiftpet/stats/:user_id", get(get_stats))
        .route("/shiftpet/pet", post(change_pet))
}
