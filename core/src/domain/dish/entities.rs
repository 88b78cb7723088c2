use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_timestamp},
    dish::value_objects::DishFields,
};

/// Menu section a dish belongs to. Declaration order is the display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
pub enum Category {
    Snack,
    Break,
    Start,
    Follow,
    Share,
    Dessert,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Snack,
        Category::Break,
        Category::Start,
        Category::Follow,
        Category::Share,
        Category::Dessert,
    ];

    /// Key under which the record store groups dishes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Snack => "To Snack",
            Category::Break => "To Break",
            Category::Start => "To Start",
            Category::Follow => "To Follow",
            Category::Share => "To Share",
            Category::Dessert => "Dessert",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Category::Snack => "🧂 To Snack",
            Category::Break => "🍳 To Break",
            Category::Start => "🥗 To Start",
            Category::Follow => "🍽️ To Follow",
            Category::Share => "👫 To Share",
            Category::Dessert => "🍰 Dessert",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        let bare = wanted
            .get(..3)
            .filter(|prefix| prefix.eq_ignore_ascii_case("to "))
            .map(|_| wanted[3..].trim_start())
            .unwrap_or(wanted);

        Category::ALL
            .into_iter()
            .find(|category| {
                category.as_str().eq_ignore_ascii_case(wanted)
                    || format!("{category:?}").eq_ignore_ascii_case(bare)
            })
            .ok_or_else(|| CoreError::InvalidCategory(s.to_string()))
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
pub enum DietTag {
    Vegetarian,
    Pescetarian,
    Halal,
    Vegan,
}

impl DietTag {
    pub const ALL: [DietTag; 4] = [
        DietTag::Vegetarian,
        DietTag::Pescetarian,
        DietTag::Halal,
        DietTag::Vegan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DietTag::Vegetarian => "Vegetarian",
            DietTag::Pescetarian => "Pescetarian",
            DietTag::Halal => "Halal",
            DietTag::Vegan => "Vegan",
        }
    }
}

impl fmt::Display for DietTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietTag {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DietTag::ALL
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::InvalidDietTag(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Dish {
    pub id: Uuid,
    pub category: Category,
    pub name: String,
    pub ingredients: Vec<String>,
    pub allergens: Vec<String>,
    pub removable_allergens: Vec<String>,
    pub diet: Vec<DietTag>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Dish {
    pub fn new(category: Category, fields: DishFields) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            category,
            name: fields.name,
            ingredients: fields.ingredients,
            allergens: fields.allergens,
            removable_allergens: fields.removable_allergens,
            diet: fields.diet,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces every authored field, mirroring how the admin editor
    /// resubmits the whole form.
    pub fn update(&mut self, fields: DishFields) {
        let (now, _) = generate_timestamp();

        self.name = fields.name;
        self.ingredients = fields.ingredients;
        self.allergens = fields.allergens;
        self.removable_allergens = fields.removable_allergens;
        self.diet = fields.diet;
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display_order() {
        let mut shuffled = vec![
            Category::Dessert,
            Category::Start,
            Category::Snack,
            Category::Share,
            Category::Follow,
            Category::Break,
        ];
        shuffled.sort();
        assert_eq!(shuffled, Category::ALL.to_vec());
    }

    #[test]
    fn test_category_parse_store_key_and_bare_name() {
        assert_eq!("To Snack".parse::<Category>().unwrap(), Category::Snack);
        assert_eq!("to follow".parse::<Category>().unwrap(), Category::Follow);
        assert_eq!("share".parse::<Category>().unwrap(), Category::Share);
        assert_eq!("Dessert".parse::<Category>().unwrap(), Category::Dessert);
        assert_eq!(
            "Brunch".parse::<Category>(),
            Err(CoreError::InvalidCategory("Brunch".to_string()))
        );
    }

    #[test]
    fn test_diet_tag_parse() {
        assert_eq!("vegan".parse::<DietTag>().unwrap(), DietTag::Vegan);
        assert_eq!(" Halal ".parse::<DietTag>().unwrap(), DietTag::Halal);
        assert!("Keto".parse::<DietTag>().is_err());
    }

    #[test]
    fn test_update_replaces_authored_fields() {
        let mut dish = Dish::new(
            Category::Start,
            DishFields {
                name: "Soup".to_string(),
                ingredients: vec!["leek".to_string()],
                allergens: vec!["celery".to_string()],
                removable_allergens: vec![],
                diet: vec![DietTag::Vegan],
            },
        );
        let id = dish.id;

        dish.update(DishFields {
            name: "Leek soup".to_string(),
            ingredients: vec!["leek".to_string(), "potato".to_string()],
            allergens: vec![],
            removable_allergens: vec![],
            diet: vec![],
        });

        assert_eq!(dish.id, id);
        assert_eq!(dish.category, Category::Start);
        assert_eq!(dish.name, "Leek soup");
        assert_eq!(dish.ingredients.len(), 2);
        assert!(dish.allergens.is_empty());
        assert!(dish.diet.is_empty());
        assert!(dish.updated_at >= dish.created_at);
    }
}
