//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    AdminOverviewResponse,
    AdminResetRequest,
    AdminResetResponse,
    ChangePetRequest,
    ChangePetResponse,
    LoginRequest,
    LoginResponse,
    LoginUser,
    OverviewSummary,
    PetBody,
    RecordSaleRequest,
    RecordSaleResponse,
    SessionBody,
    SessionResponse,
    StartSessionRequest,
    StartSessionResponse,
    StatsBody,
    StatsResponse,
    UpdateCountsRequest,
    UpdateCountsResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Employee endpoints
        super::login::login,
        // Pet endpoints
        super::pet::get_stats,
        super::pet::change_pet,
        // Shift endpoints
        super::shift::start_session,
        super::shift::get_session,
        super::shift::record_sale,
        // Admin endpoints
        super::admin::overview,
        super::admin::reset_workday,
        super::admin::update_counts,
    ),
    components(schemas(
        LoginRequest,
        LoginResponse,
        LoginUser,
        StatsBody,
        StatsResponse,
        ChangePetRequest,
        ChangePetResponse,
        StartSessionRequest,
        StartSessionResponse,
        SessionBody,
        SessionResponse,
        RecordSaleRequest,
        RecordSaleResponse,
        PetBody,
        OverviewSummary,
        AdminOverviewResponse,
        AdminResetRequest,
        AdminResetResponse,
        UpdateCountsRequest,
        UpdateCountsResponse,
    )),
    tags(
        (name = "Employee", description = "Login and identity"),
        (name = "Pet", description = "Pet stats and species"),
        (name = "Shift", description = "Work sessions and sales"),
        (name = "Admin", description = "Fleet overview and corrections"),
    ),
    info(
        title = "Shiftpet API",
        description = "Gamified employee-incentive tracker: sales feed a virtual pet",
    )
)]
pub struct ApiDoc;
