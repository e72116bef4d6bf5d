//! Property-based tests for path normalization.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::path::normalize_path;
    use proptest::prelude::*;

    proptest! {
        /// Property: normalization is idempotent
        #[test]
        fn normalize_is_idempotent(input in ".*") {
            let once = normalize_path(&input);
            let twice = normalize_path(&once);
            prop_assert_eq!(once, twice);
        }

        /// Property: normalization is deterministic (same input = same output)
        #[test]
        fn normalize_is_deterministic(input in ".*") {
            prop_assert_eq!(normalize_path(&input), normalize_path(&input));
        }

        /// Property: output never contains a double separator
        #[test]
        fn normalize_never_produces_double_separators(input in ".*") {
            let result = normalize_path(&input);
            prop_assert!(
                !result.contains("//"),
                "normalize_path produced '//' from input '{}': '{}'",
                input,
                result
            );
        }

        /// Property: output never contains a `.` segment (except the bare
        /// `.` a fully-collapsed relative path becomes)
        #[test]
        fn normalize_never_produces_dot_segments(input in ".+/.+") {
            let result = normalize_path(&input);
            if result != "." {
                for segment in result.split('/') {
                    prop_assert_ne!(segment, ".", "input '{}' produced '{}'", &input, &result);
                }
            }
        }

        /// Property: an absolute input stays absolute
        #[test]
        fn normalize_preserves_absoluteness(input in "/[a-z0-9./]*") {
            let result = normalize_path(&input);
            prop_assert!(result.starts_with('/'));
        }

        /// Property: a relative input without `..` stays relative
        #[test]
        fn normalize_preserves_relativeness(input in "[a-z0-9][a-z0-9./]*") {
            let result = normalize_path(&input);
            prop_assert!(!result.starts_with('/'));
        }

        /// Property: no trailing separator except for the bare root
        #[test]
        fn normalize_strips_trailing_separators(input in "[a-z0-9/]+") {
            let result = normalize_path(&input);
            if result != "/" {
                prop_assert!(!result.ends_with('/'), "got '{}'", result);
            }
        }

        /// Property: separator-free segments pass through untouched
        #[test]
        fn normalize_preserves_plain_segments(input in "[a-z0-9_-]+") {
            prop_assert_eq!(normalize_path(&input), input);
        }
    }
}
