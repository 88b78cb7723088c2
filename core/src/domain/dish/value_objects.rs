use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::dish::{entities::Category, entities::DietTag, helpers::parse_token_list};

/// Fields an administrator authors for a dish.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DishFields {
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub removable_allergens: Vec<String>,
    #[serde(default)]
    pub diet: Vec<DietTag>,
}

impl DishFields {
    /// Builds the fields from the comma-separated text of the admin form.
    pub fn from_text(
        name: &str,
        ingredients: &str,
        allergens: &str,
        removable_allergens: &str,
        diet: Vec<DietTag>,
    ) -> Self {
        let mut tags = Vec::with_capacity(diet.len());
        for tag in diet {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        Self {
            name: name.trim().to_string(),
            ingredients: parse_token_list(ingredients),
            allergens: parse_token_list(allergens),
            removable_allergens: parse_token_list(removable_allergens),
            diet: tags,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GetDishInput {
    pub category: Category,
    pub dish_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct CreateDishInput {
    pub category: Category,
    pub fields: DishFields,
}

#[derive(Debug, Clone)]
pub struct UpdateDishInput {
    pub category: Category,
    pub dish_id: Uuid,
    pub fields: DishFields,
}

#[derive(Debug, Clone)]
pub struct DeleteDishInput {
    pub category: Category,
    pub dish_id: Uuid,
}
