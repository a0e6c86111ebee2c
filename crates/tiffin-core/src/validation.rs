//! # Validation Module
//!
//! Input validation for everything the user types or taps.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Display layer (TypeScript)                                   │
//! │  ├── maxLength on the phone field, disabled buttons                    │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: tiffin-core (THIS MODULE)                                    │
//! │  ├── Quantities, prices, tips                                          │
//! │  └── Phone numbers, search queries                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tiffin_core::validation::{validate_phone, validate_quantity_delta};
//!
//! assert!(validate_phone("9876543210").is_ok());
//! assert!(validate_quantity_delta(0).is_err());
//! ```

use crate::error::{CoreError, ValidationError};
use crate::money::Money;
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY, MAX_TIP, MAX_UNIT_PRICE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Digits in a phone number accepted by the login screen.
pub const PHONE_DIGITS: usize = 10;

/// Longest search query accepted by the catalog.
pub const MAX_QUERY_LEN: usize = 100;

// =============================================================================
// Cart Validators
// =============================================================================

/// Validates a quantity delta passed to `add_item`.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_quantity_delta(delta: i64) -> Result<(), CoreError> {
    if delta <= 0 {
        return Err(CoreError::InvalidQuantity { requested: delta });
    }
    Ok(())
}

/// Validates the quantity a line item would end up with.
///
/// ## Rules
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_resulting_quantity(quantity: i64) -> Result<(), CoreError> {
    if quantity > MAX_ITEM_QUANTITY {
        return Err(CoreError::QuantityTooLarge {
            requested: quantity,
            max: MAX_ITEM_QUANTITY,
        });
    }
    Ok(())
}

/// Validates cart size before a new distinct item is inserted.
pub fn validate_cart_size(current_items: usize) -> Result<(), CoreError> {
    if current_items >= MAX_CART_ITEMS {
        return Err(CoreError::CartTooLarge {
            max: MAX_CART_ITEMS,
        });
    }
    Ok(())
}

/// Validates a line item identifier.
pub fn validate_item_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "item id".to_string(),
        });
    }
    Ok(())
}

/// Validates a unit price. Zero is allowed (free add-ons).
///
/// ## Rules
/// - Must not be negative
/// - Must not exceed MAX_UNIT_PRICE (₹100000)
///
/// ```rust
/// use tiffin_core::money::Money;
/// use tiffin_core::validation::validate_unit_price;
///
/// assert!(validate_unit_price(Money::from_units(249)).is_ok());
/// assert!(validate_unit_price(Money::zero()).is_ok());
/// assert!(validate_unit_price(Money::from_units(-1)).is_err());
/// ```
pub fn validate_unit_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "unit price".to_string(),
        });
    }
    if price > MAX_UNIT_PRICE {
        return Err(ValidationError::TooLarge {
            field: "unit price".to_string(),
            max: MAX_UNIT_PRICE.units(),
        });
    }
    Ok(())
}

/// Validates a tip amount. Zero is allowed, MAX_TIP (₹10000) is the ceiling.
pub fn validate_tip(amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "tip".to_string(),
        });
    }
    if amount > MAX_TIP {
        return Err(ValidationError::TooLarge {
            field: "tip".to_string(),
            max: MAX_TIP.units(),
        });
    }
    Ok(())
}

// =============================================================================
// Session & Catalog Validators
// =============================================================================

/// Validates a phone number for login.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Exactly 10 ASCII digits
///
/// ## Returns
/// The trimmed phone number.
pub fn validate_phone(phone: &str) -> ValidationResult<String> {
    let phone = phone.trim();

    if phone.is_empty() {
        return Err(ValidationError::Required {
            field: "phone".to_string(),
        });
    }

    if phone.len() != PHONE_DIGITS || !phone.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: format!("must be exactly {} digits", PHONE_DIGITS),
        });
    }

    Ok(phone.to_string())
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (returns everything)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================
