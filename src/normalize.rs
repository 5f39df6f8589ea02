//! Label normalization for comparison.
//!
//! Normalized labels are used only for matching — the original casing is
//! always what gets shown to a user.

/// Intensity/preparation qualifiers stripped when they lead a label
/// (e.g. "Extra Spicy Tuna" → "Spicy Tuna").
const QUALIFIER_PREFIXES: &[&str] = &["extra", "additional", "double", "triple"];

/// Parenthetical qualifiers stripped from the end of a label.
const QUALIFIER_SUFFIXES: &[&str] = &["(spicy)", "(mild)", "(hot)", "(extra)", "(double)"];

/// Canonicalize a raw ingredient label for comparison.
///
/// Lower-cases, trims, strips qualifier prefixes/suffixes in a single pass
/// (not recursively), drops everything that is neither alphanumeric nor
/// whitespace, and collapses whitespace runs. Pure and total: degenerate
/// input (all punctuation, all qualifiers) normalizes to an empty string,
/// which callers must treat as unmatchable.
pub fn normalize(label: &str) -> String {
    let mut cleaned = label.trim().to_lowercase();

    for prefix in QUALIFIER_PREFIXES {
        if let Some(rest) = cleaned.strip_prefix(*prefix) {
            if let Some(rest) = rest.strip_prefix(' ') {
                cleaned = rest.trim_start().to_string();
            }
        }
    }

    for suffix in QUALIFIER_SUFFIXES {
        if let Some(rest) = cleaned.strip_suffix(*suffix) {
            cleaned = rest.trim_end().to_string();
        }
    }

    let stripped: String = cleaned
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_trim() {
        assert_eq!(normalize("  White Rice  "), "white rice");
    }

    #[test]
    fn test_prefix_qualifier_stripped() {
        assert_eq!(normalize("Extra Spicy Tuna"), "spicy tuna");
        assert_eq!(normalize("Double Salmon"), "salmon");
        assert_eq!(normalize("Additional Avocado"), "avocado");
    }

    #[test]
    fn test_suffix_qualifier_stripped() {
        assert_eq!(normalize("Tuna (spicy)"), "tuna");
        assert_eq!(normalize("Edamame (extra)"), "edamame");
    }

    #[test]
    fn test_prefix_strip_is_single_pass() {
        // Each qualifier is checked once, in order; repeats survive.
        assert_eq!(normalize("extra extra rice"), "extra rice");
        // Distinct qualifiers in list order are all removed.
        assert_eq!(normalize("extra double rice"), "rice");
    }

    #[test]
    fn test_punctuation_removed_whitespace_collapsed() {
        assert_eq!(normalize("sea-weed   salad!!"), "seaweed salad");
        assert_eq!(normalize("soy, sauce"), "soy sauce");
    }

    #[test]
    fn test_degenerate_input_is_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("!!!"), "");
        assert_eq!(normalize("(spicy)"), "");
    }

    #[test]
    fn test_fixed_point_on_own_output() {
        for label in ["  Extra Spicy Tuna (hot) ", "White Rice", "sea-weed salad", "Cucumber!!"] {
            let once = normalize(label);
            assert_eq!(normalize(&once), once, "not a fixed point for {label:?}");
        }
    }
}
