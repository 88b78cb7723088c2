use axum::extract::State;
use dishguard_core::domain::scan::{
    entities::ConstraintSet, ports::ScanService, value_objects::ScanReport,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    scan::validators::ScanValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ScanMenuResponse {
    pub data: ScanReport,
}

#[utoipa::path(
    post,
    path = "",
    tag = "scan",
    summary = "Scan menu",
    description = "Classifies every dish against the diner's selections and returns the safe and modifiable ones by category. \
                   `status` tells apart an unreachable dish store, no filters selected, and filters that matched nothing.",
    request_body = ScanValidator,
    responses(
        (status = 200, body = ScanMenuResponse)
    ),
)]
pub async fn scan_menu(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ScanValidator>,
) -> Result<Response<ScanMenuResponse>, ApiError> {
    let report = state.service.scan(ConstraintSet::from(payload)).await;

    Ok(Response::OK(ScanMenuResponse { data: report }))
}
