//! Whitespace and address canonicalization.
//!
//! Every later comparison in the pipeline (column unification, identity
//! keys, badge checks) goes through these two functions, so they must be
//! pure and deterministic.

/// Collapse any run of whitespace to a single space and trim the ends.
///
/// `None` and all-whitespace inputs map to the empty string, which is the
/// uniform "absent" value throughout the pipeline.
pub fn normalize_space(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `normalize_space` over an optional field.
pub fn normalize_space_opt(value: Option<&str>) -> String {
    normalize_space(value.unwrap_or(""))
}

/// Canonicalize an address for identity-key construction.
///
/// Applies [`normalize_space`], strips every character that is neither a
/// word character nor a Hangul syllable, and lowercases. The result
/// contains no whitespace and the function is idempotent.
pub fn normalize_address(value: &str) -> String {
    // Lowercase before filtering: some lowercase mappings expand into
    // combining marks, which the filter must then strip to keep the
    // function idempotent.
    normalize_space(value)
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_space_collapses_runs() {
        assert_eq!(normalize_space("  스시 \t 야 \n"), "스시 야");
        assert_eq!(normalize_space(""), "");
        assert_eq!(normalize_space("   "), "");
        assert_eq!(normalize_space_opt(None), "");
    }

    #[test]
    fn test_normalize_address_strips_punctuation() {
        assert_eq!(
            normalize_address("서울특별시 강남구 역삼동 123-4 (2층)"),
            "서울특별시강남구역삼동12342층"
        );
        assert_eq!(normalize_address("Main St. #5"), "mainst5");
    }

    proptest! {
        #[test]
        fn prop_normalize_address_has_no_whitespace(value in ".{0,80}") {
            let out = normalize_address(&value);
            prop_assert!(!out.chars().any(char::is_whitespace));
        }

        #[test]
        fn prop_normalize_address_idempotent(value in ".{0,80}") {
            let once = normalize_address(&value);
            prop_assert_eq!(normalize_address(&once), once);
        }
    }
}
