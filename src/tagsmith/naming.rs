//! camelCase-to-hyphenated identifier rewrite, shared by the property and
//! event passes of the transformer.

use once_cell::sync::Lazy;
use regex::Regex;

// Maximal runs of "uppercase letters followed by non-uppercase characters"
// or "non-uppercase characters". `readOnly` segments as ["read", "Only"];
// `ABCdef` is a single segment.
static SEGMENTS: Lazy<Regex> = Lazy::new(|| Regex::new("[A-Z]+[^A-Z]*|[^A-Z]+").unwrap());

/// Rewrite a camelCase identifier, or a dotted path of them, into its
/// hyphenated lowercase form: `readOnly` -> `read-only`, `item.text` ->
/// `item-text`. The dot is folded into the hyphen separator, never kept.
pub fn normalize(identifier: &str) -> String {
    let segments: Vec<&str> = identifier
        .split('.')
        .flat_map(|part| SEGMENTS.find_iter(part).map(|m| m.as_str()))
        .collect();
    segments.join("-").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_case_boundaries() {
        assert_eq!(normalize("readOnly"), "read-only");
        assert_eq!(normalize("valueChanged"), "value-changed");
        assert_eq!(normalize("ojBeforeExpand"), "oj-before-expand");
    }

    #[test]
    fn single_word_is_unchanged() {
        assert_eq!(normalize("value"), "value");
        assert_eq!(normalize("chroming"), "chroming");
    }

    #[test]
    fn uppercase_run_stays_one_segment() {
        // An uppercase run plus its trailing lowercase tail is a single
        // segment, so no hyphen lands inside it.
        assert_eq!(normalize("ABCdef"), "abcdef");
        assert_eq!(normalize("innerHTML"), "inner-html");
    }

    #[test]
    fn digits_group_with_lowercase() {
        assert_eq!(normalize("column2Width"), "column2-width");
    }

    #[test]
    fn dotted_paths_fold_into_hyphens() {
        assert_eq!(normalize("item.text"), "item-text");
        assert_eq!(normalize("overview.dangerZone"), "overview-danger-zone");
        assert_eq!(normalize("a.b.c"), "a-b-c");
    }

    #[test]
    fn already_normalized_input_is_a_fixed_point() {
        for s in ["read-only", "on-value-changed", "value", "item-text"] {
            assert_eq!(normalize(s), s);
        }
    }

    #[test]
    fn empty_input_maps_to_itself() {
        assert_eq!(normalize(""), "");
    }
}
