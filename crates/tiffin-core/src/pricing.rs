//! # Pricing
//!
//! Derives the bill shown on the cart screen from the cart's line items,
//! coupon and tip.
//!
//! ## Calculation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  subtotal          = Σ unit_price × quantity                            │
//! │  gst               = round(subtotal × 5%)                               │
//! │  platform_fee      = 20                                                 │
//! │  delivery_fee      = 0 if subtotal > 499 else 40                        │
//! │  pre_discount      = subtotal + delivery_fee + tip + gst + platform_fee │
//! │  discount          = round(pre_discount × coupon rate)                  │
//! │  total             = pre_discount − discount                            │
//! │  savings           = discount + (40 if delivery was waived)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The coupon applies to the whole pre-discount total, fees and tip included.
//! `savings` is a display figure only: it counts the waived delivery fee even
//! though that fee was never charged.
//!
//! A `PricingSnapshot` is never stored. It is recomputed on every read, so it
//! cannot drift from the cart it was derived from.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::coupon::Coupon;
use crate::money::Money;
use crate::types::LineItem;
use crate::{DELIVERY_FEE, FREE_DELIVERY_THRESHOLD, GST_RATE, PLATFORM_FEE};

/// The derived bill for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PricingSnapshot {
    pub subtotal: Money,
    pub gst: Money,
    pub platform_fee: Money,
    pub delivery_fee: Money,
    pub tip: Money,
    pub pre_discount_total: Money,
    pub discount: Money,
    pub total: Money,
    pub savings: Money,
}

impl PricingSnapshot {
    /// Whether the free-delivery threshold was cleared.
    pub fn has_free_delivery(&self) -> bool {
        self.delivery_fee.is_zero()
    }
}

/// Computes the bill for a set of line items.
///
/// Pure: same inputs, same snapshot. The tip is taken as-is; callers
/// validate it before it reaches the ledger.
///
/// ## Example
/// ```rust
/// use tiffin_core::{compute_pricing, Coupon, LineItem, Money};
///
/// let mut item = LineItem::new("1", "Paneer Butter Masala", Money::from_units(300));
/// item.quantity = 2;
///
/// let bill = compute_pricing(&[item], Some(Coupon::Save10), Money::zero());
/// assert_eq!(bill.subtotal.units(), 600);
/// assert_eq!(bill.gst.units(), 30);
/// assert_eq!(bill.delivery_fee.units(), 0);
/// assert_eq!(bill.pre_discount_total.units(), 650);
/// assert_eq!(bill.discount.units(), 65);
/// assert_eq!(bill.total.units(), 585);
/// assert_eq!(bill.savings.units(), 105);
/// ```
pub fn compute_pricing(items: &[LineItem], coupon: Option<Coupon>, tip: Money) -> PricingSnapshot {
    let subtotal: Money = items.iter().map(LineItem::line_total).sum();
    let gst = subtotal.percent_of(GST_RATE);
    let free_delivery = subtotal > FREE_DELIVERY_THRESHOLD;
    let delivery_fee = if free_delivery {
        Money::zero()
    } else {
        DELIVERY_FEE
    };

    let pre_discount_total = subtotal + delivery_fee + tip + gst + PLATFORM_FEE;
    let discount = coupon
        .map(|c| pre_discount_total.percent_of(c.rate()))
        .unwrap_or_default();
    let total = pre_discount_total - discount;

    let waived_delivery = if free_delivery {
        DELIVERY_FEE
    } else {
        Money::zero()
    };

    PricingSnapshot {
        subtotal,
        gst,
        platform_fee: PLATFORM_FEE,
        delivery_fee,
        tip,
        pre_discount_total,
        discount,
        total,
        savings: discount + waived_delivery,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
