//! # mcc-types
//!
//! Type definitions for ISO 18245 Merchant Category Codes (MCC).
//!
//! MCCs are 4-digit numeric codes used in payment-card transaction processing
//! to classify a merchant by the type of goods or services it provides. This
//! crate defines the [`Category`] record shared by the registry and its
//! consumers, plus constants for frequently referenced codes.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use mcc_types::{well_known, Category};
//!
//! let category = Category::new(well_known::GROCERY_STORES, "Groceries and supermarkets");
//!
//! assert_eq!(category.code, "5411");
//! assert_eq!(category.to_string(), "5411: Groceries and supermarkets");
//! ```
//!
//! ## Without Serde
//!
//! ```toml
//! [dependencies]
//! mcc-types = { version = "0.1", default-features = false }
//! ```

#![warn(missing_docs)]

mod category;
pub mod well_known;

// Re-export all public types at crate root
pub use category::{Category, CODE_LENGTH};
