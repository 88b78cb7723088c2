use axum::extract::{Query, State};
use dishguard_core::domain::dish::{entities::Dish, ports::DishService};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetDishesResponse {
    pub data: Vec<Dish>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct GetDishesQuery {
    /// Exact dish name. Only the first dish with this name is returned.
    pub name: Option<String>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "dish",
    summary = "Get dishes",
    description = "Retrieves every dish on the menu, grouped by category, or the first dish with the given name.",
    params(GetDishesQuery),
    responses(
        (status = 200, body = GetDishesResponse),
        (status = 503, description = "Dish store unreachable")
    ),
)]
pub async fn get_dishes(
    State(state): State<AppState>,
    Query(query): Query<GetDishesQuery>,
) -> Result<Response<GetDishesResponse>, ApiError> {
    let dishes = match query.name {
        Some(name) => state
            .service
            .find_dish_by_name(name)
            .await
            .map_err(ApiError::from)?
            .into_iter()
            .collect(),
        None => state
            .service
            .list_dishes()
            .await
            .map_err(ApiError::from)?,
    };

    Ok(Response::OK(GetDishesResponse { data: dishes }))
}

#[cfg(test)]
mod tests {
    use axum::http::Uri;

    use super::*;

    #[test]
    fn test_name_query_is_optional() {
        let uri: Uri = "/dishes".parse().unwrap();
        let Query(query) = Query::<GetDishesQuery>::try_from_uri(&uri).unwrap();
        assert_eq!(query.name, None);
    }

    #[test]
    fn test_name_query_is_decoded() {
        let uri: Uri = "/dishes?name=Fish%20Tacos".parse().unwrap();
        let Query(query) = Query::<GetDishesQuery>::try_from_uri(&uri).unwrap();
        assert_eq!(query.name.as_deref(), Some("Fish Tacos"));
    }
}
