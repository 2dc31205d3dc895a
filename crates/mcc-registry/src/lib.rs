//! # mcc-registry
//!
//! Static, read-only registry of ISO 18245 Merchant Category Codes.
//!
//! The registry maps a 4-digit MCC to its English description. It is built
//! once from a compiled-in table and never modified, so all lookups are
//! pure reads and safe to share across threads.
//!
//! ## Lookups
//!
//! Input is trimmed, then checked in order:
//!
//! 1. blank input fails with [`LookupError::EmptyCode`];
//! 2. anything other than exactly four ASCII digits fails with
//!    [`LookupError::InvalidFormat`];
//! 3. a well-formed code missing from the table fails with
//!    [`LookupError::NotFound`].
//!
//! ```rust
//! use mcc_registry::{lookup_description, lookup_record, LookupError};
//!
//! assert_eq!(lookup_description("5411").unwrap(), "Groceries and supermarkets");
//!
//! let category = lookup_record(" 0742 ").unwrap();
//! assert_eq!(category.code, "0742");
//! assert_eq!(category.description, "Veterinary services");
//!
//! assert_eq!(lookup_description(""), Err(LookupError::EmptyCode));
//! assert!(matches!(
//!     lookup_description("12ab"),
//!     Err(LookupError::InvalidFormat { .. })
//! ));
//! ```
//!
//! ## Snapshots
//!
//! [`all_categories`] returns a fresh, caller-owned copy of the table on
//! every call.

#![warn(missing_docs)]

mod data;
mod error;
mod registry;
mod validate;

// Re-export mcc-types for convenience
pub use mcc_types;
pub use mcc_types::{well_known, Category};

pub use error::{LookupError, LookupResult};
pub use registry::{all_categories, lookup_description, lookup_record, Registry};
pub use validate::validate_code;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_known_codes_are_registered() {
        let codes = [
            well_known::VETERINARY_SERVICES,
            well_known::WINE_PRODUCERS,
            well_known::CHAMPAGNE_PRODUCERS,
            well_known::AGRICULTURAL_COOPERATIVES,
            well_known::GARDEN_SUPPLY_STORES,
            well_known::GROCERY_STORES,
            well_known::DRUG_STORES,
            well_known::FAST_FOOD_RESTAURANTS,
            well_known::RESTAURANTS,
            well_known::SERVICE_STATIONS,
            well_known::AUTOMATED_FUEL_DISPENSERS,
            well_known::AIRLINES,
            well_known::LODGING,
            well_known::MANUAL_CASH_DISBURSEMENTS,
            well_known::AUTOMATED_CASH_DISBURSEMENTS,
            well_known::QUASI_CASH,
            well_known::WIRE_TRANSFERS,
            well_known::GAMBLING,
        ];

        for code in codes {
            assert!(Registry::global().contains(code), "{code}");
        }
    }
}
