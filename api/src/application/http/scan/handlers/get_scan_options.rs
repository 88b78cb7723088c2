use axum::extract::State;
use dishguard_core::domain::scan::{ports::ScanService, value_objects::ScanOptions};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetScanOptionsResponse {
    pub data: ScanOptions,
}

#[utoipa::path(
    get,
    path = "/options",
    tag = "scan",
    summary = "Get scan options",
    description = "Lists the allergens and ingredients found on the menu, plus the supported diet tags.",
    responses(
        (status = 200, body = GetScanOptionsResponse),
        (status = 503, description = "Dish store unreachable")
    ),
)]
pub async fn get_scan_options(
    State(state): State<AppState>,
) -> Result<Response<GetScanOptionsResponse>, ApiError> {
    let options = state
        .service
        .scan_options()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetScanOptionsResponse { data: options }))
}
