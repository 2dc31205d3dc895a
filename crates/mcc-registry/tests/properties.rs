//! Property tests for validation and lookup.

use mcc_registry::{all_categories, lookup_description, lookup_record, LookupError};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_blank_input_is_empty_code(input in "[ \t\r\n]{0,8}") {
        prop_assert_eq!(lookup_description(&input), Err(LookupError::EmptyCode));
    }

    #[test]
    fn prop_wrong_length_digits_are_invalid(input in "[0-9]{1,3}|[0-9]{5,10}") {
        prop_assert_eq!(
            lookup_record(&input),
            Err(LookupError::InvalidFormat { value: input.clone() })
        );
    }

    #[test]
    fn prop_non_digit_four_chars_are_invalid(input in "[0-9a-zA-Z]{4}") {
        prop_assume!(!input.bytes().all(|b| b.is_ascii_digit()));
        prop_assert_eq!(
            lookup_record(&input),
            Err(LookupError::InvalidFormat { value: input.clone() })
        );
    }

    #[test]
    fn prop_four_digits_found_or_not_found(code in "[0-9]{4}") {
        let in_table = all_categories().contains_key(&code);
        match lookup_record(&code) {
            Ok(category) => {
                prop_assert!(in_table);
                prop_assert_eq!(category.code, code);
            }
            Err(err) => {
                prop_assert!(!in_table);
                prop_assert_eq!(err, LookupError::NotFound { code: code.clone() });
            }
        }
    }

    #[test]
    fn prop_padding_does_not_change_result(
        code in "[0-9]{4}",
        left in "[ \t]{0,3}",
        right in "[ \t\n]{0,3}",
    ) {
        let padded = format!("{left}{code}{right}");
        prop_assert_eq!(lookup_description(&padded), lookup_description(&code));
    }
}
