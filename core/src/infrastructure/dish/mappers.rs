use sea_orm::{ActiveValue::Set, prelude::Json};
use serde_json::Value;
use tracing::warn;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        dish::{
            entities::{Category, DietTag, Dish},
            helpers::parse_token_list,
        },
    },
    entity::dishes::{ActiveModel, Model},
};

/// Reads a list column. Absent and null columns are empty lists; a plain
/// string is treated as comma-separated text.
fn tokens_from_json(value: Option<&Json>, field: &str) -> Result<Vec<String>, CoreError> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::String(text)) => Ok(parse_token_list(text)),
        Some(Value::Array(items)) => Ok(items
            .iter()
            .filter_map(|item| match item {
                Value::String(token) if !token.trim().is_empty() => Some(token.trim().to_string()),
                _ => None,
            })
            .collect()),
        Some(other) => Err(CoreError::MalformedDishRecord(format!(
            "{field} must be a list, got {other}"
        ))),
    }
}

fn tokens_to_json(tokens: &[String]) -> Json {
    Value::Array(tokens.iter().cloned().map(Value::String).collect())
}

impl TryFrom<&Model> for Dish {
    type Error = CoreError;

    fn try_from(model: &Model) -> Result<Self, Self::Error> {
        let name = model
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| CoreError::MalformedDishRecord(format!("dish {} has no name", model.id)))?;

        let category = model.category.parse::<Category>().map_err(|_| {
            CoreError::MalformedDishRecord(format!(
                "dish {} has unknown category {}",
                model.id, model.category
            ))
        })?;

        let mut diet = Vec::new();
        for tag in tokens_from_json(model.diet.as_ref(), "diet")? {
            match tag.parse::<DietTag>() {
                Ok(tag) if !diet.contains(&tag) => diet.push(tag),
                Ok(_) => {}
                Err(e) => warn!(dish_id = %model.id, "Dropping diet tag: {}", e),
            }
        }

        Ok(Dish {
            id: model.id,
            category,
            name: name.to_string(),
            ingredients: tokens_from_json(model.ingredients.as_ref(), "ingredients")?,
            allergens: tokens_from_json(model.allergens.as_ref(), "allergens")?,
            removable_allergens: tokens_from_json(
                model.removable_allergens.as_ref(),
                "removable_allergens",
            )?,
            diet,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        })
    }
}

impl TryFrom<Model> for Dish {
    type Error = CoreError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Self::try_from(&model)
    }
}

impl From<&Dish> for ActiveModel {
    fn from(dish: &Dish) -> Self {
        let diet: Vec<String> = dish.diet.iter().map(|tag| tag.to_string()).collect();

        ActiveModel {
            id: Set(dish.id),
            category: Set(dish.category.as_str().to_string()),
            name: Set(Some(dish.name.clone())),
            ingredients: Set(Some(tokens_to_json(&dish.ingredients))),
            allergens: Set(Some(tokens_to_json(&dish.allergens))),
            removable_allergens: Set(Some(tokens_to_json(&dish.removable_allergens))),
            diet: Set(Some(tokens_to_json(&diet))),
            created_at: Set(dish.created_at.fixed_offset()),
            updated_at: Set(dish.updated_at.fixed_offset()),
        }
    }
}
