//! API key authentication (Bearer token)
//!
//! Guards the store-facing routes. Admin authorization is a separate,
//! per-request `is_admin` check inside the services.

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};

static API_KEY: std::sync::OnceLock<String> = std::sync::OnceLock::new();

const BEARER_PREFIX: &str = "Bearer ";

/// Install the API key read from Shuttle secrets at startup
pub fn init_api_key(key: String) {
    let _ = API_KEY.set(key);
}

/// Reject requests whose bearer token does not match the configured key.
/// With no key configured, auth is disabled (local development).
pub async fn auth_middleware(request: Request, next: Next) -> Result<Response, StatusCode> {
    let api_key = match API_KEY.get() {
        Some(key) if !key.is_empty() => key.as_str(),
        _ => return Ok(next.run(request).await),
    };

    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix(BEARER_PREFIX));

    match token {
        Some(token) if token == api_key => Ok(next.run(request).await),
        Some(_) => {
            tracing::warn!("Invalid API key attempted");
            Err(StatusCode::UNAUTHORIZED)
        }
        None => {
            tracing::warn!("Missing or malformed Authorization header");
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}
