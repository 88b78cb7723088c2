use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::domain::{
    common::entities::app_errors::CoreError,
    dish::entities::{DietTag, Dish},
    scan::{
        entities::ConstraintSet,
        grouper::{CategoryGroup, group},
    },
};

/// A classified snapshot. Unsafe dishes are only counted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResults {
    pub safe: Vec<Dish>,
    pub modifiable: Vec<(Dish, Vec<String>)>,
    pub unsafe_count: usize,
}

impl ScanResults {
    pub fn is_empty(&self) -> bool {
        self.safe.is_empty() && self.modifiable.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScanStatus {
    /// The dish set could not be fetched; nothing was classified.
    DataUnavailable,
    /// No allergen, diet or ingredient filter was selected.
    NoFilters,
    /// Filters were applied and every dish was excluded.
    NoMatches,
    Matches,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScanReport {
    pub status: ScanStatus,
    pub groups: Vec<CategoryGroup>,
    pub total_dishes: usize,
    pub unsafe_count: usize,
}

impl ScanReport {
    /// Turns the outcome of a repository fetch into a report. A failed fetch
    /// is reported as [`ScanStatus::DataUnavailable`] over an empty set.
    pub fn build(snapshot: Result<Vec<Dish>, CoreError>, constraints: &ConstraintSet) -> Self {
        let dishes = match snapshot {
            Ok(dishes) => dishes,
            Err(e) => {
                warn!("Scanning without dishes, fetch failed: {}", e);
                return Self {
                    status: ScanStatus::DataUnavailable,
                    groups: Vec::new(),
                    total_dishes: 0,
                    unsafe_count: 0,
                };
            }
        };

        let total_dishes = dishes.len();

        if constraints.is_empty() {
            return Self {
                status: ScanStatus::NoFilters,
                groups: Vec::new(),
                total_dishes,
                unsafe_count: 0,
            };
        }

        let results = ScanResults::partition(dishes, constraints);
        let groups = group(&results);
        let status = if groups.is_empty() {
            ScanStatus::NoMatches
        } else {
            ScanStatus::Matches
        };

        Self {
            status,
            groups,
            total_dishes,
            unsafe_count: results.unsafe_count,
        }
    }
}

/// Choices offered to the diner, collected from the current menu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScanOptions {
    pub allergens: Vec<String>,
    pub ingredients: Vec<String>,
    pub diets: Vec<DietTag>,
}

impl ScanOptions {
    pub fn from_dishes(dishes: &[Dish]) -> Self {
        let allergens: BTreeSet<&String> =
            dishes.iter().flat_map(|dish| dish.allergens.iter()).collect();
        let ingredients: BTreeSet<&String> =
            dishes.iter().flat_map(|dish| dish.ingredients.iter()).collect();

        Self {
            allergens: allergens.into_iter().cloned().collect(),
            ingredients: ingredients.into_iter().cloned().collect(),
            diets: DietTag::ALL.to_vec(),
        }
    }
}
