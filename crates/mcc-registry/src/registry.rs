//! In-memory, read-only MCC registry.
//!
//! The registry is built once from the compiled-in table on first access and
//! never changes afterwards, so every accessor is a plain read that is safe
//! to call from any number of threads.
//!
//! ```
//! use mcc_registry::Registry;
//!
//! let registry = Registry::global();
//! assert!(registry.contains("5411"));
//! assert_eq!(registry.lookup_description("5411").unwrap(), "Groceries and supermarkets");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use mcc_types::Category;

use crate::data::MCC_TABLE;
use crate::error::{LookupError, LookupResult};
use crate::validate::validate_code;

static GLOBAL_REGISTRY: LazyLock<Registry> = LazyLock::new(|| Registry::from_table(MCC_TABLE));

/// Read-only mapping from 4-digit MCC to its [`Category`].
///
/// Every key equals the `code` field of the category stored under it. No
/// accessor hands out the map itself: [`Registry::all_categories`] returns an
/// owned copy, and [`Registry::iter_sorted`] yields borrowed records only.
pub struct Registry {
    /// Categories indexed by code.
    categories: HashMap<String, Category>,
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("categories", &self.categories.len())
            .finish()
    }
}

impl Registry {
    /// Returns the process-wide registry, building it on first use.
    pub fn global() -> &'static Registry {
        &GLOBAL_REGISTRY
    }

    /// Builds a registry from `(code, description)` pairs.
    fn from_table(table: &[(&str, &str)]) -> Self {
        let mut categories = HashMap::with_capacity(table.len());

        for &(code, description) in table {
            debug_assert!(validate_code(code) == Ok(code), "malformed MCC in table: {code:?}");
            debug_assert!(!description.is_empty(), "empty description for MCC {code}");

            let previous = categories.insert(code.to_string(), Category::new(code, description));
            debug_assert!(previous.is_none(), "duplicate MCC in table: {code}");
        }

        tracing::debug!("Built MCC registry with {} categories", categories.len());

        Self { categories }
    }

    /// Looks up the full record for an MCC.
    ///
    /// The input is trimmed and validated first; the returned category's
    /// `code` is the trimmed input.
    ///
    /// # Errors
    ///
    /// [`LookupError::EmptyCode`], [`LookupError::InvalidFormat`] or
    /// [`LookupError::NotFound`], following the validation order.
    pub fn lookup_record(&self, code: &str) -> LookupResult<Category> {
        let result = validate_code(code).and_then(|code| {
            self.categories
                .get(code)
                .cloned()
                .ok_or_else(|| LookupError::NotFound {
                    code: code.to_string(),
                })
        });

        if let Err(e) = &result {
            tracing::trace!("Rejected MCC lookup: {}", e);
        }

        result
    }

    /// Looks up the description for an MCC.
    ///
    /// Delegates to [`Registry::lookup_record`], so validation and errors are
    /// identical.
    pub fn lookup_description(&self, code: &str) -> LookupResult<String> {
        self.lookup_record(code).map(|category| category.description)
    }

    /// Returns an independent copy of every category, keyed by code.
    ///
    /// Callers may mutate the returned map freely; neither the registry nor
    /// other snapshots observe the change.
    pub fn all_categories(&self) -> HashMap<String, Category> {
        self.categories.clone()
    }

    /// Returns true if `code` is a well-formed MCC present in the registry.
    ///
    /// Surrounding whitespace is ignored, as for lookups.
    pub fn contains(&self, code: &str) -> bool {
        validate_code(code).is_ok_and(|code| self.categories.contains_key(code))
    }

    /// Returns the number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns true if the registry holds no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Returns all categories ordered by code.
    pub fn iter_sorted(&self) -> impl Iterator<Item = &Category> {
        let mut sorted: Vec<&Category> = self.categories.values().collect();
        sorted.sort_unstable_by(|a, b| a.code.cmp(&b.code));
        sorted.into_iter()
    }
}

/// Looks up the description for an MCC in the global registry.
///
/// # Examples
///
/// ```
/// use mcc_registry::{lookup_description, LookupError};
///
/// assert_eq!(lookup_description("5411").unwrap(), "Groceries and supermarkets");
/// assert_eq!(lookup_description("  5411  "), lookup_description("5411"));
/// assert_eq!(
///     lookup_description("9999"),
///     Err(LookupError::NotFound { code: "9999".to_string() })
/// );
/// ```
pub fn lookup_description(code: &str) -> LookupResult<String> {
    Registry::global().lookup_description(code)
}

/// Looks up the full record for an MCC in the global registry.
///
/// # Examples
///
/// ```
/// use mcc_registry::{lookup_record, Category};
///
/// let category = lookup_record("5262").unwrap();
/// assert_eq!(category, Category::new("5262", "Garden supply stores"));
/// ```
pub fn lookup_record(code: &str) -> LookupResult<Category> {
    Registry::global().lookup_record(code)
}

/// Returns an independent copy of the global registry's categories.
///
/// # Examples
///
/// ```
/// use mcc_registry::{all_categories, Category};
///
/// let mut categories = all_categories();
/// categories.insert("TEST".to_string(), Category::new("TEST", "Test"));
///
/// assert!(!all_categories().contains_key("TEST"));
/// ```
pub fn all_categories() -> HashMap<String, Category> {
    Registry::global().all_categories()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_registry() -> Registry {
        Registry::from_table(&[
            ("0742", "Veterinary services"),
            ("5262", "Garden supply stores"),
            ("5411", "Groceries and supermarkets"),
        ])
    }

    #[test]
    fn test_lookup_record_found() {
        let registry = sample_registry();
        let category = registry.lookup_record("5411").unwrap();
        assert_eq!(category.code, "5411");
        assert_eq!(category.description, "Groceries and supermarkets");
    }

    #[test]
    fn test_lookup_record_code_is_trimmed_input() {
        let registry = sample_registry();
        let category = registry.lookup_record(" 0742\t").unwrap();
        assert_eq!(category.code, "0742");
    }

    #[test]
    fn test_lookup_record_errors_in_validation_order() {
        let registry = sample_registry();
        assert_eq!(registry.lookup_record("  "), Err(LookupError::EmptyCode));
        assert_eq!(
            registry.lookup_record("54a1"),
            Err(LookupError::InvalidFormat {
                value: "54a1".to_string()
            })
        );
        assert_eq!(
            registry.lookup_record("5999"),
            Err(LookupError::NotFound {
                code: "5999".to_string()
            })
        );
    }

    #[test]
    fn test_lookup_description_matches_record() {
        let registry = sample_registry();
        for code in ["0742", "5262", "5411", "9999", "", "12ab"] {
            assert_eq!(
                registry.lookup_description(code),
                registry.lookup_record(code).map(|c| c.description),
                "{code:?}"
            );
        }
    }

    #[test]
    fn test_all_categories_is_independent_copy() {
        let registry = sample_registry();

        let mut first = registry.all_categories();
        first.insert("9999".to_string(), Category::new("9999", "Test"));
        first.remove("5411");
        if let Some(category) = first.get_mut("0742") {
            category.description.push_str(" (edited)");
        }

        let second = registry.all_categories();
        assert_eq!(second.len(), 3);
        assert!(!second.contains_key("9999"));
        assert_eq!(second["0742"].description, "Veterinary services");
        assert!(registry.lookup_record("5411").is_ok());
        assert!(registry.lookup_record("9999").is_err());
    }

    #[test]
    fn test_keys_match_category_codes() {
        for (code, category) in Registry::global().all_categories() {
            assert_eq!(code, category.code);
        }
    }

    #[test]
    fn test_contains() {
        let registry = sample_registry();
        assert!(registry.contains("5262"));
        assert!(registry.contains(" 5262 "));
        assert!(!registry.contains("9999"));
        assert!(!registry.contains("742"));
        assert!(!registry.contains(""));
    }

    #[test]
    fn test_iter_sorted() {
        let registry = sample_registry();
        let codes: Vec<&str> = registry.iter_sorted().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["0742", "5262", "5411"]);
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_debug_shows_count_only() {
        let registry = sample_registry();
        assert_eq!(format!("{registry:?}"), "Registry { categories: 3 }");
    }

    #[test]
    fn test_compiled_table_is_well_formed() {
        let mut seen = std::collections::HashSet::new();
        for &(code, description) in MCC_TABLE {
            assert_eq!(validate_code(code), Ok(code), "{code:?}");
            assert!(!description.trim().is_empty(), "{code}");
            assert!(seen.insert(code), "duplicate {code}");
        }
        assert_eq!(Registry::global().len(), MCC_TABLE.len());
    }
}
