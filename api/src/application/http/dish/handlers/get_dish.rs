use axum::extract::{Path, State};
use dishguard_core::domain::dish::{
    entities::{Category, Dish},
    ports::DishService,
    value_objects::GetDishInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetDishResponse {
    pub data: Dish,
}

#[utoipa::path(
    get,
    path = "/{category}/{dish_id}",
    tag = "dish",
    summary = "Get dish",
    params(
        ("category" = String, Path, description = "Category key, e.g. \"To Share\" or \"share\""),
        ("dish_id" = Uuid, Path, description = "Dish ID"),
    ),
    responses(
        (status = 200, body = GetDishResponse),
        (status = 404, description = "Dish not found")
    ),
)]
pub async fn get_dish(
    Path((category, dish_id)): Path<(String, Uuid)>,
    State(state): State<AppState>,
) -> Result<Response<GetDishResponse>, ApiError> {
    let category = category.parse::<Category>().map_err(ApiError::from)?;

    let dish = state
        .service
        .get_dish(GetDishInput { category, dish_id })
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Dish not found".to_string()))?;

    Ok(Response::OK(GetDishResponse { data: dish }))
}
