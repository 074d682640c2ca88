//! Login Route
//!
//! HTTP handler that delegates to EmployeeService for the login lifecycle.

use axum::{extract::State, routing::post, Json, Router};

use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse, LoginUser};
use crate::AppState;

/// Log an employee in
#[utoipa::path(
    post,
    path = "/shiftpet/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Missing username"),
        (status = 404, description = "Unknown employee"),
        (status = 500, description = "Store failure")
    ),
    tag = "Employee"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let username = payload.username.trim();
    if username.is_empty() {
        return Err(ApiError::validation("Username is required"));
    }

    let (employee, stats) = state.employee_service.login(username).await?;

    Ok(Json(LoginResponse {
        success: true,
        user: LoginUser {
            id: employee.id,
            username: employee.username,
            name: employee.name,
            animal_choice: employee.animal_choice.to_string(),
            is_admin: employee.is_admin,
            health: stats.health,
            happiness: stats.happiness,
            total_revenue: stats.total_revenue,
        },
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/shiftpet/login", post(login))
}
