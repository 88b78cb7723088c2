use super::handlers::get_scan_options::{__path_get_scan_options, get_scan_options};
use super::handlers::scan_menu::{__path_scan_menu, scan_menu};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(scan_menu, get_scan_options))]
pub struct ScanApiDoc;

pub fn scan_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/scan", state.args.server.root_path),
            post(scan_menu),
        )
        .route(
            &format!("{}/scan/options", state.args.server.root_path),
            get(get_scan_options),
        )
}
