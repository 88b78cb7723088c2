use axum::extract::{Path, State};
use dishguard_core::domain::dish::{
    entities::Category, ports::DishService, value_objects::CreateDishInput,
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
pub struct CreateDishResponse {
    pub id: Uuid,
}

#[utoipa::path(
    post,
    path = "/{category}",
    tag = "dish",
    summary = "Create dish",
    description = "Adds a dish to a menu category. Ingredients and allergens are comma-separated text.",
    params(
        ("category" = String, Path, description = "Category key, e.g. \"To Share\" or \"share\""),
    ),
    request_body = DishValidator,
    responses(
        (status = 201, body = CreateDishResponse),
        (status = 400, description = "Unknown category or blank name")
    ),
)]
pub async fn create_dish(
    Path(category): Path<String>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<DishValidator>,
) -> Result<Response<CreateDishResponse>, ApiError> {
    let category = category.parse::<Category>().map_err(ApiError::from)?;

    let id = state
        .service
        .create_dish(CreateDishInput {
            category,
            fields: payload.into_fields(),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateDishResponse { id }))
}
