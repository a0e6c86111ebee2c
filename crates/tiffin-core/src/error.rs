//! # Error Types
//!
//! Domain-specific error types for tiffin-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tiffin-core errors (this file)                                        │
//! │  ├── CoreError        - Cart, coupon and session rule violations       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  client errors (apps/client)                                           │
//! │  └── ApiError         - What the display layer sees (serialized)       │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Display layer          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error here is local and user-correctable: the user re-enters a
//! coupon, picks another quantity, or logs in. Nothing is retried.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Cart ledger and session errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A mutation named a line item that is not in the cart.
    #[error("Item not in cart: {0}")]
    ItemNotFound(String),

    /// A dish id that the catalog does not know about.
    #[error("Dish not found: {0}")]
    DishNotFound(String),

    /// A category id that the catalog does not know about.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Quantity delta was zero or negative.
    #[error("Quantity must be positive, got {requested}")]
    InvalidQuantity { requested: i64 },

    /// The coupon code is not in the coupon table.
    ///
    /// ## User Workflow
    /// ```text
    /// Applied: SAVE10
    ///      │
    ///      ▼
    /// apply_coupon("SAVE01")   (typo)
    ///      │
    ///      ▼
    /// UnknownCoupon("SAVE01")  ─── SAVE10 stays applied
    /// ```
    #[error("Unknown coupon code: {0}")]
    UnknownCoupon(String),

    /// Item quantity would exceed the per-item maximum.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Cart has exceeded maximum allowed distinct items.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// An order was requested for an empty cart.
    #[error("Cannot place an order with an empty cart")]
    EmptyCart,

    /// An operation that needs a logged-in user ran anonymously.
    #[error("Login required")]
    NotAuthenticated,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any ledger rule runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Value is above the accepted maximum.
    #[error("{field} must not exceed {max}")]
    TooLarge { field: String, max: i64 },

    /// Invalid format (e.g., a phone number with letters).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnknownCoupon("SAVE01".to_string());
        assert_eq!(err.to_string(), "Unknown coupon code: SAVE01");

        let err = CoreError::InvalidQuantity { requested: 0 };
        assert_eq!(err.to_string(), "Quantity must be positive, got 0");

        let err = CoreError::ItemNotFound("dish-9".to_string());
        assert_eq!(err.to_string(), "Item not in cart: dish-9");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "phone".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(core_err.to_string(), "Validation error: phone is required");
    }
}
