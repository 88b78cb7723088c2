use crate::domain::{
    dish::entities::Dish,
    scan::{
        entities::{ConstraintSet, Verdict},
        normalizer::{contains_token, normalize},
        value_objects::ScanResults,
    },
};

fn normalize_all(tokens: &[String]) -> Vec<String> {
    tokens.iter().map(|token| normalize(token)).collect()
}

/// Decides whether `dish` is safe for a diner holding `constraints`.
///
/// Allergens are matched by containment (the selected token inside a
/// declared one). A selected allergen that matches a removable entry never
/// blocks the dish, even when it also matches a plain allergen; it is
/// reported in [`Verdict::SafeWithModification`] instead. Diet tags must all
/// be present and required ingredients must each equal some ingredient after
/// normalization.
pub fn classify(dish: &Dish, constraints: &ConstraintSet) -> Verdict {
    let allergens = normalize_all(&dish.allergens);
    let removable = normalize_all(&dish.removable_allergens);

    let mut removed = Vec::new();
    let mut blocked = false;

    for selected in constraints.avoid_allergens() {
        let needle = normalize(selected);

        if removable.iter().any(|entry| contains_token(entry, &needle)) {
            removed.push(selected.clone());
        } else if allergens.iter().any(|entry| contains_token(entry, &needle)) {
            blocked = true;
        }
    }

    let diet_ok = constraints
        .required_diets()
        .iter()
        .all(|tag| dish.diet.contains(tag));

    let ingredients = normalize_all(&dish.ingredients);
    let ingredients_ok = constraints
        .required_ingredients()
        .iter()
        .all(|required| ingredients.contains(&normalize(required)));

    if blocked || !diet_ok || !ingredients_ok {
        Verdict::Unsafe
    } else if !removed.is_empty() {
        Verdict::SafeWithModification(removed)
    } else {
        Verdict::Safe
    }
}

impl ScanResults {
    /// Classifies a snapshot, keeping snapshot order inside each bucket.
    pub fn partition(dishes: Vec<Dish>, constraints: &ConstraintSet) -> Self {
        let mut results = ScanResults::default();

        for dish in dishes {
            match classify(&dish, constraints) {
                Verdict::Safe => results.safe.push(dish),
                Verdict::SafeWithModification(removed) => results.modifiable.push((dish, removed)),
                Verdict::Unsafe => results.unsafe_count += 1,
            }
        }

        results
    }
}
