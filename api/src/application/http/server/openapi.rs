use utoipa::OpenApi;

use crate::application::http::{
    dish::router::DishApiDoc, health::HealthApiDoc, scan::router::ScanApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Dishguard API",
        description = "Classify menu dishes against a diner's allergens, diets and required ingredients."
    ),
    nest(
        (path = "/dishes", api = DishApiDoc, tags = ["dish"]),
        (path = "/scan", api = ScanApiDoc, tags = ["scan"]),
        (path = "/health", api = HealthApiDoc, tags = ["health"]),
    )
)]
pub struct ApiDoc;
