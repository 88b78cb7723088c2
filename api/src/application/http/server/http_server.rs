use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::Router;
use axum::http::header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE, LOCATION};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use axum_server::Handle;
use dishguard_core::{
    application::create_service, domain::common::DishguardConfig,
    infrastructure::db::postgres::Postgres,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info, info_span, warn};
use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiDocument;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::http::dish::router::dish_routes;
use crate::application::http::health::health_routes;
use crate::application::http::scan::router::scan_routes;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::ApiDoc;
use crate::args::Args;

/// Opens the record store for this process. The [`Postgres`] handle is
/// returned so the caller can close it on shutdown.
pub async fn state(args: Arc<Args>) -> Result<(AppState, Postgres), anyhow::Error> {
    let config = DishguardConfig::from(args.as_ref().clone());
    let (service, postgres) = create_service(config).await?;

    Ok((AppState::new(args, service), postgres))
}

/// The generated document with every path moved under `root_path`.
pub fn prefixed_openapi(root_path: &str) -> OpenApiDocument {
    let mut openapi = ApiDoc::openapi();
    let paths = std::mem::take(&mut openapi.paths.paths);
    openapi.paths.paths = paths
        .into_iter()
        .map(|(path, item)| (format!("{root_path}{path}"), item))
        .collect();
    openapi
}

/// Scalar, Swagger UI, Redoc and RapiDoc, all reading the same document.
fn docs_routes(root_path: &str) -> Router<AppState> {
    let openapi = prefixed_openapi(root_path);
    let spec_url = format!("{root_path}/api-docs/openapi.json");

    Router::new()
        .merge(Scalar::with_url(format!("{root_path}/scalar"), openapi.clone()))
        .merge(SwaggerUi::new(format!("{root_path}/swagger-ui")).url(spec_url.clone(), openapi.clone()))
        .merge(Redoc::with_url(format!("{root_path}/redoc"), openapi))
        .merge(RapiDoc::new(spec_url).path(format!("{root_path}/rapidoc")))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring allowed origin {}: {}", origin, e);
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    debug!("Allowed origins: {:?}", origins);

    CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::PUT,
            Method::OPTIONS,
        ])
        .allow_origin(origins)
        .allow_headers([CONTENT_TYPE, CONTENT_LENGTH, ACCEPT, LOCATION])
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let root_path = state.args.server.root_path.clone();

    let trace_layer = TraceLayer::new_for_http().make_span_with(|request: &axum::extract::Request| {
        info_span!("http_request", method = %request.method(), uri = %request.uri())
    });
    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let router = Router::new()
        .merge(docs_routes(&root_path))
        .merge(dish_routes(state.clone()))
        .merge(scan_routes(state.clone()))
        .merge(health_routes(&root_path))
        .route(
            &format!("{root_path}/metrics"),
            get(|| async move { metric_handle.render() }),
        )
        .layer(trace_layer)
        .layer(cors_layer(&state.args.server.allowed_origins))
        .layer(prometheus_layer)
        .with_state(state);
    Ok(router)
}

/// Serves `app` until `handle` is told to shut down, letting in-flight
/// requests finish.
pub async fn serve(app: Router, addr: SocketAddr, handle: Handle) -> Result<(), anyhow::Error> {
    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}

/// Triggers a graceful shutdown of `handle` on Ctrl-C.
pub fn shutdown_on_ctrl_c(handle: Handle) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("shutdown requested"),
            Err(e) => warn!("Failed to listen for Ctrl-C: {}", e),
        }
        handle.graceful_shutdown(Some(Duration::from_secs(10)));
    });
}
