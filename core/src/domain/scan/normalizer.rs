/// Canonical comparison form of a tag: surrounding whitespace removed,
/// lower-cased.
pub fn normalize(token: &str) -> String {
    token.trim().to_lowercase()
}

/// Allergen containment match: the selected token occurs inside the
/// declared one. Both sides are expected to be normalized already.
pub fn contains_token(declared: &str, selected: &str) -> bool {
    declared.contains(selected)
}
