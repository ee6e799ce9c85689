//! Small string predicates and name helpers

/// Returns `true` if the input is already entirely lowercase
///
/// Uses full Unicode lowercasing, so characters without a case (digits,
/// punctuation) never make the check fail.
pub fn is_lower_case(input: &str) -> bool {
    input == input.to_lowercase()
}

/// Returns the genitive (possessive) form of a name
///
/// Names already ending in a lowercase `s` are returned unchanged, every
/// other name gets an `s` appended. The check is case-sensitive: `"ANNAS"`
/// becomes `"ANNASs"`.
pub fn genitive(name: &str) -> String {
    if name.ends_with('s') {
        name.to_string()
    } else {
        format!("{name}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_lower_case() {
        assert!(is_lower_case("jonatan"));
        assert!(!is_lower_case("JONATAN"));
        assert!(!is_lower_case("Jonatan"));
        assert!(!is_lower_case("jOnAtAn"));
    }

    #[test]
    fn test_is_lower_case_caseless_characters() {
        assert!(is_lower_case(""));
        assert!(is_lower_case("123 !?"));
        assert!(is_lower_case("åäö"));
        assert!(!is_lower_case("Åsa"));
    }

    #[test]
    fn test_genitive() {
        assert_eq!(genitive("Jonatan"), "Jonatans");
        assert_eq!(genitive("Elis"), "Elis");
        assert_eq!(genitive("Anna"), "Annas");
    }

    #[test]
    fn test_genitive_is_case_sensitive() {
        assert_eq!(genitive("ANNAS"), "ANNASs");
    }

    #[test]
    fn test_genitive_empty_name() {
        assert_eq!(genitive(""), "s");
    }
}
