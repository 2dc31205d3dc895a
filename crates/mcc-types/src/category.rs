//! Merchant category record.

use std::fmt;

/// Number of ASCII digits in a Merchant Category Code.
pub const CODE_LENGTH: usize = 4;

/// A merchant category: an MCC together with its English description.
///
/// The code is kept in string form so that leading zeros survive
/// (`"0742"` and `"742"` are different values, and only the former is a
/// well-formed MCC).
///
/// # Examples
///
/// ```
/// use mcc_types::Category;
///
/// let category = Category::new("5262", "Garden supply stores");
///
/// assert_eq!(category.code, "5262");
/// assert_eq!(category.description, "Garden supply stores");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Category {
    /// The 4-digit merchant category code.
    pub code: String,
    /// Human-readable English description of the category.
    pub description: String,
}

impl Category {
    /// Creates a new category record.
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.description)
    }
}
