use axum::extract::{Path, State};
use dishguard_core::domain::dish::{
    entities::{Category, Dish},
    ports::DishService,
    value_objects::UpdateDishInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    dish::validators::DishValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateDishResponse {
    pub data: Dish,
}

#[utoipa::path(
    put,
    path = "/{category}/{dish_id}",
    tag = "dish",
    summary = "Update dish",
    description = "Replaces every authored field of a dish.",
    params(
        ("category" = String, Path, description = "Category key, e.g. \"To Share\" or \"share\""),
        ("dish_id" = Uuid, Path, description = "Dish ID"),
    ),
    request_body = DishValidator,
    responses(
        (status = 200, body = UpdateDishResponse),
        (status = 404, description = "Dish not found")
    ),
)]
pub async fn update_dish(
    Path((category, dish_id)): Path<(String, Uuid)>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<DishValidator>,
) -> Result<Response<UpdateDishResponse>, ApiError> {
    let category = category.parse::<Category>().map_err(ApiError::from)?;

    let dish = state
        .service
        .update_dish(UpdateDishInput {
            category,
            dish_id,
            fields: payload.into_fields(),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateDishResponse { data: dish }))
}
