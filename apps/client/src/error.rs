//! # API Error Type
//!
//! Unified error type for client commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Tiffin                                 │
//! │                                                                         │
//! │  Display layer               Rust client                                │
//! │  ─────────────               ───────────                                │
//! │                                                                         │
//! │  applyCoupon('SAVE01')                                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Ledger rule broken? ─── CoreError::UnknownCoupon ── ApiError ──►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { code: "INVALID_COUPON", message: "Unknown coupon code: SAVE01" }    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tiffin_core::{CoreError, ValidationError};
use ts_rs::TS;

/// Error returned from client commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Item not in cart: 4"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum ErrorCode {
    /// Cart item, dish or category does not exist
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Coupon code not recognised
    InvalidCoupon,

    /// Cart rule violated (too many items, empty cart)
    CartError,

    /// Login required
    Unauthorized,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::ItemNotFound(_)
            | CoreError::DishNotFound(_)
            | CoreError::CategoryNotFound(_) => ErrorCode::NotFound,
            CoreError::InvalidQuantity { .. }
            | CoreError::QuantityTooLarge { .. }
            | CoreError::Validation(_) => ErrorCode::ValidationError,
            CoreError::UnknownCoupon(_) => ErrorCode::InvalidCoupon,
            CoreError::CartTooLarge { .. } | CoreError::EmptyCart => ErrorCode::CartError,
            CoreError::NotAuthenticated => ErrorCode::Unauthorized,
        };

        // The Validation wrapper prefix is noise on a form field
        let message = match err {
            CoreError::Validation(e) => e.to_string(),
            other => other.to_string(),
        };

        ApiError::new(code, message)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("Serialization failed: {}", err);
        ApiError::internal("Failed to serialize response")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_codes() {
        let err: ApiError = CoreError::UnknownCoupon("SAVE01".to_string()).into();
        assert_eq!(err.code, ErrorCode::InvalidCoupon);
        assert_eq!(err.message, "Unknown coupon code: SAVE01");

        let err: ApiError = CoreError::ItemNotFound("4".to_string()).into();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err: ApiError = CoreError::InvalidQuantity { requested: 0 }.into();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err: ApiError = CoreError::NotAuthenticated.into();
        assert_eq!(err.code, ErrorCode::Unauthorized);
    }

    #[test]
    fn test_validation_message_is_unwrapped() {
        let err: ApiError = CoreError::Validation(ValidationError::Required {
            field: "phone".to_string(),
        })
        .into();
        assert_eq!(err.message, "phone is required");
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::new(ErrorCode::CartError, "Cannot place an order with an empty cart");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "CART_ERROR");
        assert_eq!(json["message"], "Cannot place an order with an empty cart");
    }
}
