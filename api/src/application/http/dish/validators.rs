use dishguard_core::domain::dish::{entities::DietTag, value_objects::DishFields};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Admin form payload. Ingredient and allergen lists are comma-separated
/// text, exactly as typed.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct DishValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    pub ingredients: String,

    #[serde(default)]
    pub allergens: String,

    #[serde(default)]
    pub removable_allergens: String,

    #[serde(default)]
    pub diet: Vec<DietTag>,
}

impl DishValidator {
    pub fn into_fields(self) -> DishFields {
        DishFields::from_text(
            &self.name,
            &self.ingredients,
            &self.allergens,
            &self.removable_allergens,
            self.diet,
        )
    }
}
