//! Admin Routes - fleet overview, manual reset, count corrections
//!
//! HTTP handlers that delegate to AdminService. The admin check itself
//! lives in the service layer.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{
    AdminOverviewResponse, AdminResetRequest, AdminResetResponse, OverviewSummary,
    UpdateCountsRequest, UpdateCountsResponse,
};
use crate::AppState;

/// Fleet-wide pet overview
#[utoipa::path(
    get,
    path = "/shiftpet/admin/overview/{admin_user_id}",
    params(("admin_user_id" = Uuid, Path, description = "Requesting admin's ID")),
    responses(
        (status = 200, description = "All pets with rollup", body = AdminOverviewResponse),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "Unknown employee"),
        (status = 500, description = "Store failure")
    ),
    tag = "Admin"
)]
pub async fn overview(
    State(state): State<AppState>,
    Path(admin_user_id): Path<Uuid>,
) -> Result<Json<AdminOverviewResponse>, ApiError> {
    let (rows, summary) = state.admin_service.overview(admin_user_id).await?;

    Ok(Json(AdminOverviewResponse {
        success: true,
        pets: rows.into_iter().map(Into::into).collect(),
        summary: OverviewSummary {
            total_employees: summary.total_employees,
            active_today: summary.active_today,
            avg_health: summary.avg_health,
            avg_happiness: summary.avg_happiness,
        },
    }))
}

/// Force the workday reset
#[utoipa::path(
    post,
    path = "/shiftpet/admin/reset",
    request_body = AdminResetRequest,
    responses(
        (status = 200, description = "Workday reset", body = AdminResetResponse),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "Unknown employee"),
        (status = 500, description = "Store failure")
    ),
    tag = "Admin"
)]
pub async fn reset_workday(
    State(state): State<AppState>,
    Json(payload): Json<AdminResetRequest>,
) -> Result<Json<AdminResetResponse>, ApiError> {
    let marker = state.admin_service.force_reset(payload.admin_user_id).await?;

    Ok(Json(AdminResetResponse {
        success: true,
        reset_date: marker.reset_date,
    }))
}

/// Overwrite an employee's counters for today
#[utoipa::path(
    post,
    path = "/shiftpet/admin/counts",
    request_body = UpdateCountsRequest,
    responses(
        (status = 200, description = "Counts updated", body = UpdateCountsResponse),
        (status = 400, description = "No counts provided"),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "No session for today"),
        (status = 500, description = "Store failure")
    ),
    tag = "Admin"
)]
pub async fn update_counts(
    State(state): State<AppState>,
    Json(payload): Json<UpdateCountsRequest>,
) -> Result<Json<UpdateCountsResponse>, ApiError> {
    let (session, happiness) = state
        .admin_service
        .update_counts(
            payload.admin_user_id,
            payload.target_user_id,
            payload.credit_cards,
            payload.paid_memberships,
        )
        .await?;

    Ok(Json(UpdateCountsResponse {
        success: true,
        current_credit_cards: session.current_credit_cards,
        current_paid_memberships: session.current_paid_memberships,
        happiness,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/shiftpet/admin/overview/:admin_user_id", get(overview))
        .route("/shiftpet/admin/reset", post(reset_workday))
        .route("/shiftpet/admin/counts", post(update_counts))
}
