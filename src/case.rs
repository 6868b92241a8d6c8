//! Letter-case helpers for replacements

/// Uppercase the first character, leaving the rest untouched
pub fn capitalize_first_letter(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Carry the casing of a matched span over to its replacement
///
/// Rules, first match wins:
/// - all-lowercase original: replacement lowercased
/// - all-uppercase original: replacement uppercased
/// - first character already in upper form: replacement capitalized
/// - otherwise: replacement kept exactly as stored in the dictionary
///
/// "Upper form" means the character is unchanged by uppercasing, so a span
/// that starts with a digit or punctuation mark also gets a capitalized
/// replacement.
pub fn match_case(original: &str, replacement: &str) -> String {
    if original == original.to_lowercase() {
        return replacement.to_lowercase();
    }
    if original == original.to_uppercase() {
        return replacement.to_uppercase();
    }
    match original.chars().next() {
        Some(first) if first.to_uppercase().eq([first]) => capitalize_first_letter(replacement),
        _ => replacement.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first_letter() {
        assert_eq!(capitalize_first_letter("mr"), "Mr");
        assert_eq!(capitalize_first_letter("heath robinson device"), "Heath robinson device");
        assert_eq!(capitalize_first_letter("Prof."), "Prof.");
        assert_eq!(capitalize_first_letter(""), "");
        assert_eq!(capitalize_first_letter("élan"), "Élan");
    }

    #[test]
    fn test_lowercase_original() {
        assert_eq!(match_case("favorite", "favourite"), "favourite");
        assert_eq!(match_case("paracetamol", "Tylenol"), "tylenol");
    }

    #[test]
    fn test_uppercase_original() {
        assert_eq!(match_case("FAVORITE", "favourite"), "FAVOURITE");
        assert_eq!(match_case("PARKING LOT", "car park"), "CAR PARK");
    }

    #[test]
    fn test_capitalized_original() {
        assert_eq!(match_case("Favorite", "favourite"), "Favourite");
        assert_eq!(match_case("Parking lot", "car park"), "Car park");
        // Only the first letter is touched, the rest keeps dictionary casing
        assert_eq!(match_case("Tylenol", "paraCETAMOL"), "ParaCETAMOL");
    }

    #[test]
    fn test_mixed_case_keeps_dictionary_casing() {
        assert_eq!(match_case("fAVORITE", "favourite"), "favourite");
        assert_eq!(match_case("tyLenol", "Paracetamol"), "Paracetamol");
    }

    #[test]
    fn test_caseless_original_counts_as_lowercase() {
        // A span without letters equals its own lowercase form
        assert_eq!(match_case("1-2", "One-Two"), "one-two");
    }

    #[test]
    fn test_leading_non_letter_capitalizes() {
        assert_eq!(match_case("'Twas", "it was"), "It was");
    }
}
