use super::handlers::create_dish::{__path_create_dish, create_dish};
use super::handlers::delete_dish::{__path_delete_dish, delete_dish};
use super::handlers::get_dish::{__path_get_dish, get_dish};
use super::handlers::get_dishes::{__path_get_dishes, get_dishes};
use super::handlers::update_dish::{__path_update_dish, update_dish};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_dishes, get_dish, create_dish, update_dish, delete_dish))]
pub struct DishApiDoc;

pub fn dish_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/dishes", state.args.server.root_path),
            get(get_dishes),
        )
        .route(
            &format!("{}/dishes/{{category}}", state.args.server.root_path),
            post(create_dish),
        )
        .route(
            &format!(
                "{}/dishes/{{category}}/{{dish_id}}",
                state.args.server.root_path
            ),
            get(get_dish).put(update_dish).delete(delete_dish),
        )
}
