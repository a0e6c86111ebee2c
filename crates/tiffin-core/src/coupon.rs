//! # Coupons
//!
//! The fixed coupon table and the cart's single coupon slot.
//!
//! ## Coupon Table
//! ```text
//! ┌───────────────┬──────────┐
//! │ Code          │ Discount │
//! ├───────────────┼──────────┤
//! │ SAVE10        │ 10%      │
//! │ WELCOME20     │ 20%      │
//! └───────────────┴──────────┘
//! ```
//!
//! Codes are matched case-insensitively; surrounding whitespace is ignored.
//!
//! ## Slot State Machine
//! ```text
//!              apply(a)                 apply(b)
//!  NoCoupon ─────────────► Applied(a) ─────────────► Applied(b)
//!     ▲                        │
//!     └────── remove() ────────┘
//!
//!  apply(unknown) in any state ──► UnknownCoupon error, state unchanged
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::types::Rate;

/// A coupon from the fixed coupon table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum Coupon {
    /// 10% off the pre-discount total.
    Save10,
    /// 20% off the pre-discount total.
    Welcome20,
}

impl Coupon {
    /// Every coupon in the table.
    pub const ALL: [Coupon; 2] = [Coupon::Save10, Coupon::Welcome20];

    /// Canonical (upper-case) code.
    pub const fn code(&self) -> &'static str {
        match self {
            Coupon::Save10 => "SAVE10",
            Coupon::Welcome20 => "WELCOME20",
        }
    }

    /// Discount rate applied to the pre-discount total.
    pub const fn rate(&self) -> Rate {
        match self {
            Coupon::Save10 => Rate::from_bps(1000),
            Coupon::Welcome20 => Rate::from_bps(2000),
        }
    }

    /// Looks a code up in the coupon table.
    ///
    /// ```rust
    /// use tiffin_core::Coupon;
    ///
    /// assert_eq!(Coupon::lookup(" welcome20 "), Some(Coupon::Welcome20));
    /// assert_eq!(Coupon::lookup("SAVE50"), None);
    /// ```
    pub fn lookup(code: &str) -> Option<Coupon> {
        let code = code.trim();
        Coupon::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
    }
}

impl FromStr for Coupon {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coupon::lookup(s).ok_or_else(|| CoreError::UnknownCoupon(s.trim().to_string()))
    }
}

impl fmt::Display for Coupon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// =============================================================================
// Coupon Slot
// =============================================================================

/// The cart's coupon slot: always exactly one of two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", tag = "state", content = "coupon")]
#[ts(export)]
pub enum CouponSlot {
    #[default]
    NoCoupon,
    Applied(Coupon),
}

impl CouponSlot {
    /// The applied coupon, if any.
    pub const fn coupon(&self) -> Option<Coupon> {
        match self {
            CouponSlot::NoCoupon => None,
            CouponSlot::Applied(c) => Some(*c),
        }
    }

    /// Discount rate of the slot; zero when empty.
    pub fn rate(&self) -> Rate {
        self.coupon().map(|c| c.rate()).unwrap_or_default()
    }

    /// Transition: apply a code. Unknown codes leave the slot untouched.
    pub fn apply(&mut self, code: &str) -> Result<Coupon, CoreError> {
        let coupon: Coupon = code.parse()?;
        *self = CouponSlot::Applied(coupon);
        Ok(coupon)
    }

    /// Transition: back to `NoCoupon`.
    pub fn remove(&mut self) {
        *self = CouponSlot::NoCoupon;
    }
}
