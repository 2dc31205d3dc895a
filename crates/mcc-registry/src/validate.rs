//! MCC input normalization and format validation.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{LookupError, LookupResult};

/// Exactly four ASCII digits. `[0-9]` rather than `\d`, which is
/// Unicode-aware in `regex` and would accept e.g. Arabic-Indic digits.
static MCC_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}$").expect("Invalid MCC code regex"));

/// Normalizes and validates an MCC, without consulting the registry.
///
/// Surrounding whitespace is trimmed. Returns the trimmed code when it is
/// exactly four ASCII digits.
///
/// # Errors
///
/// - [`LookupError::EmptyCode`] if nothing is left after trimming.
/// - [`LookupError::InvalidFormat`] if the trimmed value is not four digits.
///
/// # Examples
///
/// ```
/// use mcc_registry::{validate_code, LookupError};
///
/// assert_eq!(validate_code("  0742 "), Ok("0742"));
/// assert_eq!(validate_code("   "), Err(LookupError::EmptyCode));
/// assert!(matches!(validate_code("742"), Err(LookupError::InvalidFormat { .. })));
/// ```
pub fn validate_code(code: &str) -> LookupResult<&str> {
    let code = code.trim();

    if code.is_empty() {
        return Err(LookupError::EmptyCode);
    }

    if !MCC_CODE_REGEX.is_match(code) {
        return Err(LookupError::InvalidFormat {
            value: code.to_string(),
        });
    }

    Ok(code)
}
