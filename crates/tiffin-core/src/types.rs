//! # Domain Types
//!
//! Core domain types used throughout Tiffin.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    LineItem     │   │      Tip        │   │      Rate       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (unique)    │   │  NoTip          │   │  bps (u32)      │       │
//! │  │  name           │   │  Twenty/Thirty  │   │  500 = 5%       │       │
//! │  │  unit_price     │   │  Fifty          │   │                 │       │
//! │  │  quantity       │   │  Custom(Money)  │   │                 │       │
//! │  │  metadata...    │   │                 │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Rate
// =============================================================================

/// A percentage represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 500 bps = 5% GST and 1000 bps = 10% off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rate(u32);

impl Rate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        Rate(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One distinct product entry in the cart.
///
/// ## Invariants (enforced by [`crate::Cart`])
/// - `id` is unique within a cart
/// - `quantity` is always >= 1 while the item is in a cart
/// - `unit_price` is never negative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    /// Identifier, unique within the cart.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Price of a single unit.
    pub unit_price: Money,

    /// Quantity in cart.
    pub quantity: i64,

    /// Image reference (URL) for the cart row.
    pub image: Option<String>,

    /// Name of the restaurant the dish comes from.
    pub restaurant: Option<String>,

    pub description: Option<String>,

    /// Free-form customizations ("extra spicy", "no onion").
    #[serde(default)]
    pub customization: Vec<String>,
}

impl LineItem {
    /// Creates a line item with quantity 1 and no metadata.
    ///
    /// The quantity is overwritten by the delta passed to
    /// [`crate::Cart::add_item`] when the item is first inserted.
    pub fn new(id: impl Into<String>, name: impl Into<String>, unit_price: Money) -> Self {
        LineItem {
            id: id.into(),
            name: name.into(),
            unit_price,
            quantity: 1,
            image: None,
            restaurant: None,
            description: None,
            customization: Vec::new(),
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_restaurant(mut self, restaurant: impl Into<String>) -> Self {
        self.restaurant = Some(restaurant.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a customization string.
    pub fn with_customization(mut self, customization: impl Into<String>) -> Self {
        self.customization.push(customization.into());
        self
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Tip
// =============================================================================

/// Tip for the delivery partner.
///
/// The cart screen offers three preset chips plus a custom amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum Tip {
    #[default]
    NoTip,
    /// ₹20
    Twenty,
    /// ₹30
    Thirty,
    /// ₹50
    Fifty,
    /// Any non-negative amount entered by the user.
    Custom(Money),
}

impl Tip {
    /// The preset chips in display order.
    pub const PRESETS: [Tip; 4] = [Tip::NoTip, Tip::Twenty, Tip::Thirty, Tip::Fifty];

    /// Returns the tip amount.
    pub const fn amount(&self) -> Money {
        match self {
            Tip::NoTip => Money::zero(),
            Tip::Twenty => Money::from_units(20),
            Tip::Thirty => Money::from_units(30),
            Tip::Fifty => Money::from_units(50),
            Tip::Custom(amount) => *amount,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
