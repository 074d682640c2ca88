//! Shift Routes - session lifecycle and sale recording
//!
//! HTTP handlers that delegate to ShiftService.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use shiftpet::SaleEvent;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{
    RecordSaleRequest, RecordSaleResponse, SessionResponse, StartSessionRequest,
    StartSessionResponse,
};
use crate::AppState;

/// Start (or re-declare) today's shift
#[utoipa::path(
    post,
    path = "/shiftpet/session",
    request_body = StartSessionRequest,
    responses(
        (status = 200, description = "Session created", body = StartSessionResponse),
        (status = 400, description = "Invalid work hours"),
        (status = 404, description = "Unknown employee"),
        (status = 500, description = "Store failure")
    ),
    tag = "Shift"
)]
pub async fn start_session(
    State(state): State<AppState>,
    Json(payload): Json<StartSessionRequest>,
) -> Result<Json<StartSessionResponse>, ApiError> {
    let session = state
        .shift_service
        .start_session(payload.user_id, payload.work_hours)
        .await?;

    Ok(Json(StartSessionResponse {
        success: true,
        work_hours: session.work_hours,
        goal_amount: session.goal_amount,
        goal_paid_memberships: session.goal_paid_memberships,
        goal_credit_cards: session.goal_credit_cards,
    }))
}

/// Today's session for an employee
#[utoipa::path(
    get,
    path = "/shiftpet/session/{user_id}",
    params(("user_id" = Uuid, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Today's session", body = SessionResponse),
        (status = 404, description = "No session for today"),
        (status = 500, description = "Store failure")
    ),
    tag = "Shift"
)]
pub async fn get_session(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = state.shift_service.today_session(user_id).await?;

    Ok(Json(SessionResponse {
        success: true,
        session: session.into(),
    }))
}

/// Record a sale (feeds the pet)
#[utoipa::path(
    post,
    path = "/shiftpet/sale",
    request_body = RecordSaleRequest,
    responses(
        (status = 200, description = "Sale recorded", body = RecordSaleResponse),
        (status = 400, description = "Invalid revenue"),
        (status = 404, description = "No session for today"),
        (status = 500, description = "Store failure")
    ),
    tag = "Shift"
)]
pub async fn record_sale(
    State(state): State<AppState>,
    Json(payload): Json<RecordSaleRequest>,
) -> Result<Json<RecordSaleResponse>, ApiError> {
    let sale = SaleEvent {
        revenue: payload.revenue,
        has_credit_card: payload.has_credit_card,
        has_paid_membership: payload.has_paid_membership,
        has_warranty: payload.has_warranty,
        overridden_high_value: payload.overridden_high_value,
    };

    let (applied, message) = state.shift_service.record_sale(payload.user_id, sale).await?;

    Ok(Json(RecordSaleResponse {
        success: true,
        health: applied.stats.health,
        happiness: applied.stats.happiness,
        total_revenue: applied.stats.total_revenue,
        goal_met: applied.session.goal_met,
        message,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/shiftpet/session", post(start_session))
        .route("/shiftpet/session/:user_id", get(get_session))
        .route("/shiftpet/sale", post(record_sale))
}
