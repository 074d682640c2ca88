use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod auth;
mod error;
mod models;
mod routes;

use adapters::{
    PgEmployeeRepository, PgResetRepository, PgSaleRepository, PgSessionRepository,
    PgStatsRepository,
};
use application::{AdminService, EmployeeService, ShiftService};

/// Type aliases for application services with concrete repository implementations
pub type AppEmployeeService =
    EmployeeService<PgEmployeeRepository, PgStatsRepository, PgSessionRepository, PgResetRepository>;
pub type AppShiftService =
    ShiftService<PgEmployeeRepository, PgSessionRepository, PgSaleRepository>;
pub type AppAdminService =
    AdminService<PgEmployeeRepository, PgSessionRepository, PgResetRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub employee_service: Arc<AppEmployeeService>,
    pub shift_service: Arc<AppShiftService>,
    pub admin_service: Arc<AppAdminService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Shiftpet API is running - keep those pets fed".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🐾 Shiftpet API initializing...");

    // Initialize API key from secrets
    if let Some(api_key) = secrets.get("SHIFTPET_API_KEY") {
        auth::init_api_key(api_key);
        tracing::info!("🔐 API key authentication enabled");
    } else {
        tracing::warn!("⚠️  No SHIFTPET_API_KEY set - authentication disabled");
    }

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("✅ Database migrations completed");

    // Initialize repositories and application services
    let employees = Arc::new(PgEmployeeRepository::new(pool.clone()));
    let stats = Arc::new(PgStatsRepository::new(pool.clone()));
    let sessions = Arc::new(PgSessionRepository::new(pool.clone()));
    let sales = Arc::new(PgSaleRepository::new(pool.clone()));
    let resets = Arc::new(PgResetRepository::new(pool));

    let employee_service = Arc::new(EmployeeService::new(
        employees.clone(),
        stats,
        sessions.clone(),
        resets.clone(),
    ));
    let shift_service = Arc::new(ShiftService::new(
        employees.clone(),
        sessions.clone(),
        sales,
    ));
    let admin_service = Arc::new(AdminService::new(employees, sessions, resets));

    let state = AppState {
        employee_service,
        shift_service,
        admin_service,
    };

    // Protected routes (require authentication)
    let protected_routes = Router::new()
        .merge(routes::login::router())
        .merge(routes::pet::router())
        .merge(routes::shift::router())
        .merge(routes::admin::router())
        .layer(middleware::from_fn(auth::auth_middleware));

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    // Build router with shared state
    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(protected_routes)
        .layer(CorsLayer::permissive())
        .with_state(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Shiftpet API ready - every sale feeds a pet");

    Ok(router.into())
}
