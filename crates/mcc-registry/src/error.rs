//! Lookup error types.

use thiserror::Error;

/// Errors that can occur when looking up a Merchant Category Code.
///
/// Every variant reads as "MCC code not found" followed by the cause, so
/// callers that only match on message text still see a not-found failure.
/// Callers that need to branch on the cause should match on the variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Input was empty or whitespace only.
    #[error("MCC code not found: empty code")]
    EmptyCode,

    /// Input, after trimming, is not exactly four ASCII digits.
    #[error("MCC code not found: invalid format (expected 4 digits, got {value:?})")]
    InvalidFormat {
        /// The rejected (trimmed) value.
        value: String,
    },

    /// Input is a well-formed code that is not in the registry.
    #[error("MCC code not found: {code}")]
    NotFound {
        /// The code that was looked up.
        code: String,
    },
}

impl LookupError {
    /// Returns the offending input echoed by this error, if any.
    ///
    /// `EmptyCode` carries nothing, since the input was blank.
    pub fn input(&self) -> Option<&str> {
        match self {
            Self::EmptyCode => None,
            Self::InvalidFormat { value } => Some(value),
            Self::NotFound { code } => Some(code),
        }
    }
}

/// Result type for MCC lookups.
pub type LookupResult<T> = Result<T, LookupError>;
