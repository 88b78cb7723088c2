use axum::{Router, extract::State, routing::get};
use dishguard_core::domain::health::ports::HealthCheckService;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub database_ping_ms: u64,
}

#[utoipa::path(
    get,
    path = "",
    tag = "health",
    summary = "Health check",
    description = "Pings the dish store and reports the round-trip time.",
    responses(
        (status = 200, body = HealthResponse),
        (status = 503, description = "Dish store unreachable")
    )
)]
pub async fn health(State(state): State<AppState>) -> Result<Response<HealthResponse>, ApiError> {
    let database_ping_ms = state.service.health().await.map_err(ApiError::from)?;

    Ok(Response::OK(HealthResponse {
        status: "ok".to_string(),
        database_ping_ms,
    }))
}

#[derive(OpenApi)]
#[openapi(paths(health))]
pub struct HealthApiDoc;

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{}/health", root_path), get(health))
}
