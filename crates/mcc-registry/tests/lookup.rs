//! End-to-end lookups against the compiled-in registry.

use std::thread;

use mcc_registry::{all_categories, lookup_description, lookup_record, Category, LookupError};

fn invalid_format(value: &str) -> LookupError {
    LookupError::InvalidFormat {
        value: value.to_string(),
    }
}

fn not_found(code: &str) -> LookupError {
    LookupError::NotFound {
        code: code.to_string(),
    }
}

#[test]
fn test_lookup_description_known_codes() {
    let cases = [
        ("0742", "Veterinary services"),
        ("0743", "Wine producers"),
        ("0744", "Champagne producers"),
        ("0763", "Agricultural co-operatives"),
        ("5411", "Groceries and supermarkets"),
        ("5262", "Garden supply stores"),
    ];

    for (code, expected) in cases {
        assert_eq!(lookup_description(code).as_deref(), Ok(expected), "{code}");
    }
}

#[test]
fn test_lookup_description_failures() {
    let cases = [
        ("9999", not_found("9999")),
        ("", LookupError::EmptyCode),
        ("abc", invalid_format("abc")),
        ("123", invalid_format("123")),
        ("12345", invalid_format("12345")),
        ("12ab", invalid_format("12ab")),
    ];

    for (code, expected) in cases {
        assert_eq!(lookup_description(code), Err(expected), "{code:?}");
    }
}

#[test]
fn test_whitespace_padding_is_ignored() {
    assert_eq!(lookup_description("  5411  "), lookup_description("5411"));
    assert_eq!(lookup_record("\n5262\t").unwrap().code, "5262");
}

#[test]
fn test_leading_zeros_are_significant() {
    assert_eq!(lookup_description("0742").unwrap(), "Veterinary services");
    assert_eq!(lookup_description("742"), Err(invalid_format("742")));
}

#[test]
fn test_lookup_record() {
    assert_eq!(
        lookup_record("5411"),
        Ok(Category::new("5411", "Groceries and supermarkets"))
    );
    assert_eq!(
        lookup_record("5262"),
        Ok(Category::new("5262", "Garden supply stores"))
    );
    assert_eq!(lookup_record("9999"), Err(not_found("9999")));
    assert_eq!(lookup_record(""), Err(LookupError::EmptyCode));
    assert_eq!(lookup_record("abc"), Err(invalid_format("abc")));
}

#[test]
fn test_error_messages() {
    let cases = [("", "empty code"), ("abc", "invalid format"), ("9999", "9999")];

    for (code, expected) in cases {
        let message = lookup_description(code).unwrap_err().to_string();
        assert!(message.starts_with("MCC code not found"), "{message}");
        assert!(message.contains(expected), "{message}");
    }
}

#[test]
fn test_all_categories_contains_known_codes() {
    let categories = all_categories();
    assert!(!categories.is_empty());

    for code in ["0742", "0743", "0744", "0763", "5411", "5262"] {
        assert!(categories.contains_key(code), "missing {code}");
    }
}

#[test]
fn test_all_categories_matches_lookups() {
    for (code, category) in all_categories() {
        assert_eq!(lookup_record(&code).as_ref(), Ok(&category));
        assert_eq!(lookup_description(&code), Ok(category.description));
    }
}

#[test]
fn test_all_categories_is_a_copy() {
    let mut categories = all_categories();
    categories.insert("TEST".to_string(), Category::new("TEST", "Test"));
    categories.insert("9999".to_string(), Category::new("9999", "Test"));

    let again = all_categories();
    assert!(!again.contains_key("TEST"));
    assert!(!again.contains_key("9999"));
    assert_eq!(lookup_record("9999"), Err(not_found("9999")));
}

#[test]
fn test_concurrent_lookups_and_snapshots() {
    let expected = all_categories();

    thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                let mut snapshot = all_categories();
                snapshot.clear();
                assert_eq!(lookup_description("5411").unwrap(), "Groceries and supermarkets");
            });
        }
    });

    assert_eq!(all_categories(), expected);
}
