use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use dishguard_core::domain::dish::{
    entities::Category, ports::DishService, value_objects::DeleteDishInput,
};
use uuid::Uuid;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

#[utoipa::path(
    delete,
    path = "/{category}/{dish_id}",
    tag = "dish",
    summary = "Delete dish",
    params(
        ("category" = String, Path, description = "Category key, e.g. \"To Share\" or \"share\""),
        ("dish_id" = Uuid, Path, description = "Dish ID"),
    ),
    responses(
        (status = 204, description = "Dish deleted"),
        (status = 404, description = "Dish not found")
    )
)]
pub async fn delete_dish(
    Path((category, dish_id)): Path<(String, Uuid)>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let category = category.parse::<Category>().map_err(ApiError::from)?;

    state
        .service
        .delete_dish(DeleteDishInput { category, dish_id })
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
