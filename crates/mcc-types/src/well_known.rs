//! Well-known Merchant Category Codes.
//!
//! This module provides constants for MCCs that are commonly referenced in
//! payment processing rules, such as grocery, fuel, travel and
//! quasi-cash categories.
//!
//! # Examples
//!
//! ```
//! use mcc_types::well_known;
//!
//! let code = "5411";
//! assert_eq!(code, well_known::GROCERY_STORES);
//!
//! // Leading zeros are part of the code
//! assert_eq!(well_known::VETERINARY_SERVICES, "0742");
//! ```

// =============================================================================
// Agricultural Services
// =============================================================================

/// Veterinary services - 0742.
pub const VETERINARY_SERVICES: &str = "0742";

/// Wine producers - 0743.
pub const WINE_PRODUCERS: &str = "0743";

/// Champagne producers - 0744.
pub const CHAMPAGNE_PRODUCERS: &str = "0744";

/// Agricultural co-operatives - 0763.
pub const AGRICULTURAL_COOPERATIVES: &str = "0763";

// =============================================================================
// Retail
// =============================================================================

/// Garden supply stores - 5262.
pub const GARDEN_SUPPLY_STORES: &str = "5262";

/// Groceries and supermarkets - 5411.
///
/// The category most card programs treat as everyday essentials.
pub const GROCERY_STORES: &str = "5411";

/// Drug stores and pharmacies - 5912.
pub const DRUG_STORES: &str = "5912";

/// Fast food restaurants - 5814.
pub const FAST_FOOD_RESTAURANTS: &str = "5814";

/// Eating places and restaurants - 5812.
pub const RESTAURANTS: &str = "5812";

// =============================================================================
// Fuel & Travel
// =============================================================================

/// Service stations - 5541.
pub const SERVICE_STATIONS: &str = "5541";

/// Automated fuel dispensers - 5542.
pub const AUTOMATED_FUEL_DISPENSERS: &str = "5542";

/// Airlines and air carriers - 4511.
pub const AIRLINES: &str = "4511";

/// Lodging: hotels, motels and resorts - 7011.
pub const LODGING: &str = "7011";

// =============================================================================
// Financial & Quasi-Cash
// =============================================================================

/// Manual cash disbursements at financial institutions - 6010.
pub const MANUAL_CASH_DISBURSEMENTS: &str = "6010";

/// Automated cash disbursements - 6011.
///
/// ATM withdrawals.
pub const AUTOMATED_CASH_DISBURSEMENTS: &str = "6011";

/// Quasi-cash: foreign currency, money orders and travelers cheques - 6051.
pub const QUASI_CASH: &str = "6051";

/// Wire transfers and money orders - 4829.
pub const WIRE_TRANSFERS: &str = "4829";

/// Betting, including lottery tickets and casino gaming chips - 7995.
pub const GAMBLING: &str = "7995";
