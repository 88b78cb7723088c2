/// Splits comma-separated free text into tokens: each piece is trimmed,
/// blank pieces are dropped and authoring order is kept.
pub fn parse_token_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token_list_trims_and_drops_blanks() {
        assert_eq!(
            parse_token_list(" rice ,peanuts,, , soy sauce,"),
            vec!["rice", "peanuts", "soy sauce"]
        );
    }

    #[test]
    fn test_parse_token_list_empty_text() {
        assert!(parse_token_list("").is_empty());
        assert!(parse_token_list(" , ,").is_empty());
    }

    #[test]
    fn test_parse_token_list_preserves_case_and_order() {
        assert_eq!(
            parse_token_list("Tree Nuts, Milk, egg"),
            vec!["Tree Nuts", "Milk", "egg"]
        );
    }
}
