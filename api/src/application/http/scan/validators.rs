use dishguard_core::domain::{dish::entities::DietTag, scan::entities::ConstraintSet};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Diner's filter selections. Every list may be omitted.
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct ScanValidator {
    #[serde(default)]
    pub avoid_allergens: Vec<String>,

    #[serde(default)]
    pub required_diets: Vec<DietTag>,

    #[serde(default)]
    pub required_ingredients: Vec<String>,
}

impl From<ScanValidator> for ConstraintSet {
    fn from(payload: ScanValidator) -> Self {
        ConstraintSet::new(
            payload.avoid_allergens,
            payload.required_diets,
            payload.required_ingredients,
        )
    }
}
