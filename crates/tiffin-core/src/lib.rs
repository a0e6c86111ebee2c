//! # tiffin-core: Pure Business Logic for Tiffin
//!
//! This crate is the **heart** of the Tiffin food-ordering client. It holds
//! the cart ledger and every rule that turns a cart into a bill, as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tiffin Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Display layer (React Native)                    │   │
//! │  │   Login ──► Landing ──► Cart ──► Order Confirmed               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 tiffin-client (apps/client)                     │   │
//! │  │   add_to_cart, apply_coupon, set_tip, place_order, ...          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tiffin-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │  money  │ │  cart   │ │ coupon  │ │ pricing │ │ catalog │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO TIMERS • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Whole-unit money type and basis-point rounding
//! - [`types`] - Line items, tips, rates
//! - [`cart`] - The cart ledger (item reducer, coupon slot, tip)
//! - [`coupon`] - The fixed coupon table
//! - [`pricing`] - `PricingSnapshot` derivation
//! - [`catalog`] - Static restaurant and dish data
//! - [`auth`] - Stubbed login session
//! - [`validation`] - Input validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use tiffin_core::{Cart, LineItem, Money};
//!
//! let mut cart = Cart::new();
//! cart.add_item(LineItem::new("thali", "Veg Thali", Money::from_units(300)), 2)
//!     .unwrap();
//! cart.apply_coupon("save10").unwrap();
//!
//! let pricing = cart.pricing();
//! assert_eq!(pricing.subtotal.units(), 600);
//! assert_eq!(pricing.pre_discount_total.units(), 650);
//! assert_eq!(pricing.discount.units(), 65);
//! assert_eq!(pricing.total.units(), 585);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod coupon;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use auth::{AuthSession, LoginMethod, SocialProvider};
pub use cart::Cart;
pub use catalog::{Catalog, Category, Dish, Restaurant, SearchResults};
pub use coupon::{Coupon, CouponSlot};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{compute_pricing, PricingSnapshot};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct line items allowed in a single cart.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single line item.
///
/// Guards against fat-finger orders (1000 naan instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Highest unit price a line item may carry.
///
/// Together with the quantity and cart caps this keeps every bill well
/// inside `i64`.
pub const MAX_UNIT_PRICE: Money = Money::from_units(100_000);

/// Highest tip accepted, preset or custom.
pub const MAX_TIP: Money = Money::from_units(10_000);

/// GST charged on the subtotal, in basis points (5%).
pub const GST_RATE: Rate = Rate::from_bps(500);

/// Flat platform fee added to every order.
pub const PLATFORM_FEE: Money = Money::from_units(20);

/// Delivery fee charged when the subtotal does not clear the threshold.
pub const DELIVERY_FEE: Money = Money::from_units(40);

/// Delivery is free once the subtotal is strictly above this amount.
pub const FREE_DELIVERY_THRESHOLD: Money = Money::from_units(499);
