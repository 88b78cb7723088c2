use serde::{Deserialize, Serialize};

use crate::domain::{dish::entities::DietTag, scan::normalizer::normalize};

/// The diner's current filter selections. Rebuilt on every scan; blank
/// tokens never reach the classifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    avoid_allergens: Vec<String>,
    required_diets: Vec<DietTag>,
    required_ingredients: Vec<String>,
}

impl ConstraintSet {
    pub fn new<A, I>(
        avoid_allergens: A,
        required_diets: impl IntoIterator<Item = DietTag>,
        required_ingredients: I,
    ) -> Self
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut diets = Vec::new();
        for tag in required_diets {
            if !diets.contains(&tag) {
                diets.push(tag);
            }
        }

        Self {
            avoid_allergens: dedup_tokens(avoid_allergens),
            required_diets: diets,
            required_ingredients: dedup_tokens(required_ingredients),
        }
    }

    pub fn avoid_allergens(&self) -> &[String] {
        &self.avoid_allergens
    }

    pub fn required_diets(&self) -> &[DietTag] {
        &self.required_diets
    }

    pub fn required_ingredients(&self) -> &[String] {
        &self.required_ingredients
    }

    /// True when the diner has not selected any filter at all.
    pub fn is_empty(&self) -> bool {
        self.avoid_allergens.is_empty()
            && self.required_diets.is_empty()
            && self.required_ingredients.is_empty()
    }
}

fn dedup_tokens<T>(tokens: T) -> Vec<String>
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    let mut seen: Vec<String> = Vec::new();
    let mut kept = Vec::new();

    for token in tokens {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }
        let key = normalize(trimmed);
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);
        kept.push(trimmed.to_string());
    }

    kept
}

/// Outcome of classifying one dish against a [`ConstraintSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", content = "removed", rename_all = "snake_case")]
pub enum Verdict {
    Unsafe,
    Safe,
    /// Safe once the listed allergens (as the diner selected them) are left out.
    SafeWithModification(Vec<String>),
}
