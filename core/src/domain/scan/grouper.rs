use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    dish::entities::{Category, Dish},
    scan::value_objects::ScanResults,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GroupedDish {
    pub dish_id: Uuid,
    pub name: String,
    /// `"<allergen>-free"` labels, empty for dishes safe as served.
    pub modifications: Vec<String>,
}

impl GroupedDish {
    fn safe(dish: &Dish) -> Self {
        Self {
            dish_id: dish.id,
            name: dish.name.clone(),
            modifications: Vec::new(),
        }
    }

    fn modified(dish: &Dish, removed: &[String]) -> Self {
        Self {
            dish_id: dish.id,
            name: dish.name.clone(),
            modifications: removed.iter().map(|token| format!("{token}-free")).collect(),
        }
    }
}

impl fmt::Display for GroupedDish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifications.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(
                f,
                "{} (can be made {})",
                self.name,
                self.modifications.join(", ")
            )
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryGroup {
    pub category: Category,
    pub heading: String,
    pub dishes: Vec<GroupedDish>,
}

/// Groups the dishes that survived classification by category, in display
/// order. Within a category safe dishes come before modifiable ones and
/// empty categories are left out.
pub fn group(results: &ScanResults) -> Vec<CategoryGroup> {
    Category::ALL
        .into_iter()
        .filter_map(|category| {
            let safe = results
                .safe
                .iter()
                .filter(|dish| dish.category == category)
                .map(GroupedDish::safe);
            let modifiable = results
                .modifiable
                .iter()
                .filter(|(dish, _)| dish.category == category)
                .map(|(dish, removed)| GroupedDish::modified(dish, removed));

            let dishes: Vec<GroupedDish> = safe.chain(modifiable).collect();
            if dishes.is_empty() {
                return None;
            }

            Some(CategoryGroup {
                category,
                heading: category.heading().to_string(),
                dishes,
            })
        })
        .collect()
}
