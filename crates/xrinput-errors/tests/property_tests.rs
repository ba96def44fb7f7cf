//! Property-based tests for error message composition.

use xrinput_errors::{ConfigError, ErrorCategory, ProviderError, XrInputError};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_query_failure_mentions_query(query in "[a-zA-Z]+", reason in "[a-z ]*") {
        let err = ProviderError::query_failed(&query, &reason);
        let msg = err.to_string();
        prop_assert!(msg.contains(&query));
        prop_assert!(msg.contains(&reason));
    }

    #[test]
    fn test_invalid_field_mentions_field(field in "[a-z_]+") {
        let err = ConfigError::invalid(&field, "bad");
        prop_assert!(err.to_string().contains(&field));
    }

    #[test]
    fn test_wrapped_errors_keep_category(code in 0u8..=2u8) {
        let (err, expected): (XrInputError, ErrorCategory) = match code {
            0 => (ProviderError::unknown_device("#1").into(), ErrorCategory::Provider),
            1 => (ConfigError::parse("c.json", "eof").into(), ErrorCategory::Config),
            _ => (XrInputError::other("x"), ErrorCategory::Other),
        };
        prop_assert_eq!(err.category(), expected);
    }
}
