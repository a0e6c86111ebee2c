//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Whole Units Only
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Menu prices, fees and tips are whole rupees: ₹249, ₹40, ₹20.          │
//! │  There is no paise anywhere in this domain.                            │
//! │                                                                         │
//! │  Money is therefore an integer count of whole currency units, and      │
//! │  every percentage (GST, coupons) is rounded back to a whole unit the   │
//! │  moment it is computed.                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding Policy
//! Percentages are expressed in basis points and applied with
//! **round half up**: `(amount × bps + 5000) / 10000`. For the
//! non-negative amounts the ledger produces, this matches ordinary
//! rounding (`32.5 → 33`, `32.4 → 32`).
//!
//! ## Usage
//! ```rust
//! use tiffin_core::money::Money;
//!
//! let price = Money::from_units(249);
//! let line = price * 2;
//! assert_eq!(line.units(), 498);
//! assert_eq!(line.to_string(), "₹498");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::Rate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole currency units.
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction never needs a checked path
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serializes as a bare number** so the display layer reads `650`
///
/// ## Where Money Flows
/// ```text
/// Dish.price ──► LineItem.unit_price ──► line total ──► subtotal
///                                                         │
///            GST, platform fee, delivery fee, tip ◄──────┘
///                                │
///                                ▼
///                     pre-discount total ──► coupon ──► total
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole currency units.
    ///
    /// ```rust
    /// use tiffin_core::money::Money;
    ///
    /// let fee = Money::from_units(40);
    /// assert_eq!(fee.units(), 40);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the value in whole currency units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Applies a rate and rounds the result to a whole unit (half up).
    ///
    /// ## Example
    /// ```rust
    /// use tiffin_core::money::Money;
    /// use tiffin_core::types::Rate;
    ///
    /// // 5% GST on ₹650 = ₹32.50 → ₹33
    /// let gst = Money::from_units(650).percent_of(Rate::from_bps(500));
    /// assert_eq!(gst.units(), 33);
    ///
    /// // 10% of ₹644 = ₹64.40 → ₹64
    /// let off = Money::from_units(644).percent_of(Rate::from_bps(1000));
    /// assert_eq!(off.units(), 64);
    /// ```
    pub fn percent_of(&self, rate: Rate) -> Money {
        // i128 so large carts cannot overflow the intermediate product
        let units = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_units(units as i64)
    }

    /// Multiplies money by a quantity.
    ///
    /// ```rust
    /// use tiffin_core::money::Money;
    ///
    /// let line_total = Money::from_units(329).multiply_quantity(3);
    /// assert_eq!(line_total.units(), 987);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount with the rupee sign, e.g. `₹585` or `-₹40`.
///
/// Display-layer formatting with a configurable symbol lives in the client
/// config; this is the canonical form used in logs and receipts.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}", sign, self.0.abs())
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
