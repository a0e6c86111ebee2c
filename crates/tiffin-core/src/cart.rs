//! # Cart Ledger
//!
//! The cart owns its line items, its coupon slot and the selected tip, and
//! derives the bill from them on demand.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Ledger Operations                               │
//! │                                                                         │
//! │  Operation               Effect                                         │
//! │  ─────────               ──────                                         │
//! │  add_item(item, n)       same id? qty += n : push(item with qty n)     │
//! │  decrease_quantity(id)   qty > 1 ? qty -= 1 : remove                    │
//! │  remove_item(id)         remove unconditionally                         │
//! │  apply_coupon(code)      slot = Applied(code) or UnknownCoupon          │
//! │  remove_coupon()         slot = NoCoupon                                │
//! │  set_tip(tip)            tip = tip                                      │
//! │  clear()                 back to an empty cart                          │
//! │  pricing()               (read only) derive PricingSnapshot             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Fields are private: the only way to change a cart is through the
//! operations above, so the invariants below always hold.

use serde::Serialize;
use ts_rs::TS;

use crate::coupon::{Coupon, CouponSlot};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing::{compute_pricing, PricingSnapshot};
use crate::types::{LineItem, Tip};
use crate::validation::{
    validate_cart_size, validate_item_id, validate_quantity_delta, validate_resulting_quantity,
    validate_tip, validate_unit_price,
};

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by `id` (adding the same id increases quantity)
/// - Every item has quantity >= 1 (decreasing past 1 removes the item)
/// - Maximum distinct items: 100, maximum quantity per item: 999
/// - The coupon slot holds at most one coupon
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    items: Vec<LineItem>,
    coupon: CouponSlot,
    tip: Tip,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    // -------------------------------------------------------------------------
    // Item reducer
    // -------------------------------------------------------------------------

    /// Adds `quantity_delta` units of an item.
    ///
    /// ## Behavior
    /// - Item id already in cart: its quantity increases by the delta; the
    ///   existing entry keeps its price and metadata
    /// - Item id not in cart: appended with quantity = delta
    ///
    /// ## Errors
    /// - `InvalidQuantity` if the delta is zero or negative
    /// - `QuantityTooLarge` if the resulting quantity exceeds 999
    /// - `CartTooLarge` if a new distinct item would exceed 100 items
    /// - `Validation` for an empty id, or a unit price that is negative or
    ///   above ₹100000
    pub fn add_item(&mut self, item: LineItem, quantity_delta: i64) -> CoreResult<()> {
        validate_quantity_delta(quantity_delta)?;

        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            let new_qty = existing.quantity.saturating_add(quantity_delta);
            validate_resulting_quantity(new_qty)?;
            existing.quantity = new_qty;
            return Ok(());
        }

        validate_item_id(&item.id)?;
        validate_unit_price(item.unit_price)?;
        validate_cart_size(self.items.len())?;
        validate_resulting_quantity(quantity_delta)?;

        self.items.push(LineItem {
            quantity: quantity_delta,
            ..item
        });
        Ok(())
    }

    /// Decrements an item's quantity by one, removing it when it would drop
    /// below one.
    ///
    /// ## Errors
    /// - `ItemNotFound` if the id is not in the cart
    pub fn decrease_quantity(&mut self, id: &str) -> CoreResult<()> {
        let index = self.position(id)?;

        if self.items[index].quantity > 1 {
            self.items[index].quantity -= 1;
        } else {
            self.items.remove(index);
        }
        Ok(())
    }

    /// Removes an item regardless of its quantity.
    ///
    /// ## Returns
    /// The removed line item.
    pub fn remove_item(&mut self, id: &str) -> CoreResult<LineItem> {
        let index = self.position(id)?;
        Ok(self.items.remove(index))
    }

    /// Empties the cart: items, coupon and tip.
    pub fn clear(&mut self) {
        *self = Cart::default();
    }

    fn position(&self, id: &str) -> CoreResult<usize> {
        self.items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| CoreError::ItemNotFound(id.to_string()))
    }

    // -------------------------------------------------------------------------
    // Coupon & tip
    // -------------------------------------------------------------------------

    /// Applies a coupon code (case-insensitive).
    ///
    /// An unknown code fails with `UnknownCoupon` and leaves any previously
    /// applied coupon in place. A valid code replaces the current coupon.
    pub fn apply_coupon(&mut self, code: &str) -> CoreResult<Coupon> {
        self.coupon.apply(code)
    }

    /// Clears the applied coupon; the discount drops to zero.
    pub fn remove_coupon(&mut self) {
        self.coupon.remove();
    }

    /// Selects the tip.
    ///
    /// ## Errors
    /// - `Validation` for a custom amount that is negative or above ₹10000
    pub fn set_tip(&mut self, tip: Tip) -> CoreResult<()> {
        validate_tip(tip.amount())?;
        self.tip = tip;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Looks up a line item by id.
    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn coupon(&self) -> Option<Coupon> {
        self.coupon.coupon()
    }

    pub fn coupon_slot(&self) -> CouponSlot {
        self.coupon
    }

    pub fn tip(&self) -> Tip {
        self.tip
    }

    /// Returns the number of distinct items in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Σ unit price × quantity.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Derives the bill for the cart as it is right now.
    pub fn pricing(&self) -> PricingSnapshot {
        compute_pricing(&self.items, self.coupon(), self.tip.amount())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::MAX_CART_ITEMS;

    fn dish(id: &str, price: i64) -> LineItem {
        LineItem::new(id, format!("Dish {}", id), Money::from_units(price))
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();
        cart.add_item(dish("1", 249), 2).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.subtotal().units(), 498);
    }

    #[test]
    fn test_add_same_id_sums_quantities() {
        let mut cart = Cart::new();
        cart.add_item(dish("1", 249), 2).unwrap();
        cart.add_item(dish("1", 249), 3).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.get("1").map(|i| i.quantity), Some(5));
    }

    #[test]
    fn test_add_same_id_keeps_original_entry() {
        let mut cart = Cart::new();
        cart.add_item(dish("1", 249).with_restaurant("Flavor Haven"), 1)
            .unwrap();
        cart.add_item(dish("1", 999), 1).unwrap();

        let item = cart.get("1").unwrap();
        assert_eq!(item.unit_price.units(), 249);
        assert_eq!(item.restaurant.as_deref(), Some("Flavor Haven"));
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = Cart::new();
        cart.add_item(dish("b", 10), 1).unwrap();
        cart.add_item(dish("a", 10), 1).unwrap();
        cart.add_item(dish("b", 10), 1).unwrap();

        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_add_rejects_non_positive_delta() {
        let mut cart = Cart::new();
        assert_eq!(
            cart.add_item(dish("1", 100), 0),
            Err(CoreError::InvalidQuantity { requested: 0 })
        );
        assert_eq!(
            cart.add_item(dish("1", 100), -2),
            Err(CoreError::InvalidQuantity { requested: -2 })
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_rejects_negative_price_and_empty_id() {
        let mut cart = Cart::new();
        assert!(matches!(
            cart.add_item(dish("1", -5), 1),
            Err(CoreError::Validation(ValidationError::MustNotBeNegative { .. }))
        ));
        assert!(matches!(
            cart.add_item(dish(" ", 5), 1),
            Err(CoreError::Validation(ValidationError::Required { .. }))
        ));
    }

    #[test]
    fn test_add_quantity_cap() {
        let mut cart = Cart::new();
        cart.add_item(dish("1", 10), 998).unwrap();
        cart.add_item(dish("1", 10), 1).unwrap();
        assert!(matches!(
            cart.add_item(dish("1", 10), 1),
            Err(CoreError::QuantityTooLarge { requested: 1000, .. })
        ));
        assert_eq!(cart.get("1").map(|i| i.quantity), Some(999));
    }

    #[test]
    fn test_add_cart_size_cap() {
        let mut cart = Cart::new();
        for i in 0..MAX_CART_ITEMS {
            cart.add_item(dish(&i.to_string(), 1), 1).unwrap();
        }
        assert_eq!(
            cart.add_item(dish("overflow", 1), 1),
            Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS
            })
        );
        // Existing ids can still grow
        assert!(cart.add_item(dish("0", 1), 1).is_ok());
    }

    #[test]
    fn test_decrease_quantity() {
        let mut cart = Cart::new();
        cart.add_item(dish("1", 100), 2).unwrap();

        cart.decrease_quantity("1").unwrap();
        assert_eq!(cart.get("1").map(|i| i.quantity), Some(1));

        cart.decrease_quantity("1").unwrap();
        assert!(cart.get("1").is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_decrease_missing_item() {
        let mut cart = Cart::new();
        assert_eq!(
            cart.decrease_quantity("ghost"),
            Err(CoreError::ItemNotFound("ghost".to_string()))
        );
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        cart.add_item(dish("1", 100), 5).unwrap();
        cart.add_item(dish("2", 50), 1).unwrap();

        let removed = cart.remove_item("1").unwrap();
        assert_eq!(removed.quantity, 5);
        assert_eq!(cart.item_count(), 1);

        assert_eq!(
            cart.remove_item("1"),
            Err(CoreError::ItemNotFound("1".to_string()))
        );
    }

    #[test]
    fn test_quantities_never_drop_below_one() {
        let mut cart = Cart::new();
        cart.add_item(dish("1", 100), 3).unwrap();
        cart.add_item(dish("2", 100), 1).unwrap();

        for _ in 0..3 {
            cart.decrease_quantity("1").unwrap();
            assert!(cart.items().iter().all(|i| i.quantity >= 1));
        }
        assert!(cart.get("1").is_none());
        assert!(cart.get("2").is_some());
    }

    #[test]
    fn test_subtotal_matches_line_totals() {
        let mut cart = Cart::new();
        cart.add_item(dish("1", 249), 2).unwrap();
        cart.add_item(dish("2", 329), 1).unwrap();
        cart.add_item(dish("3", 0), 4).unwrap();

        let expected: i64 = cart
            .items()
            .iter()
            .map(|i| i.unit_price.units() * i.quantity)
            .sum();
        assert_eq!(cart.subtotal().units(), expected);
        assert_eq!(cart.pricing().subtotal.units(), 827);
    }

    #[test]
    fn test_apply_save10() {
        let mut cart = Cart::new();
        cart.add_item(dish("1", 300), 2).unwrap();
        cart.apply_coupon("SAVE10").unwrap();

        let pricing = cart.pricing();
        assert_eq!(
            pricing.discount,
            pricing.pre_discount_total.percent_of(Coupon::Save10.rate())
        );
        assert_eq!(pricing.total.units(), 585);
    }

    #[test]
    fn test_apply_then_remove_welcome20() {
        let mut cart = Cart::new();
        cart.add_item(dish("1", 300), 2).unwrap();
        cart.apply_coupon("welcome20").unwrap();
        assert_eq!(cart.pricing().discount.units(), 130);

        cart.remove_coupon();
        let pricing = cart.pricing();
        assert!(pricing.discount.is_zero());
        assert_eq!(pricing.total, pricing.pre_discount_total);
        assert_eq!(cart.coupon_slot(), CouponSlot::NoCoupon);
    }

    #[test]
    fn test_unknown_coupon_keeps_previous_coupon() {
        let mut cart = Cart::new();
        cart.add_item(dish("1", 300), 2).unwrap();
        cart.apply_coupon("SAVE10").unwrap();

        assert_eq!(
            cart.apply_coupon("SAVE100"),
            Err(CoreError::UnknownCoupon("SAVE100".to_string()))
        );
        assert_eq!(cart.coupon(), Some(Coupon::Save10));
        assert_eq!(cart.pricing().discount.units(), 65);
    }

    #[test]
    fn test_tip_flows_into_pricing() {
        let mut cart = Cart::new();
        cart.add_item(dish("1", 300), 2).unwrap();
        cart.set_tip(Tip::Thirty).unwrap();
        assert_eq!(cart.pricing().pre_discount_total.units(), 680);

        assert!(cart.set_tip(Tip::Custom(Money::from_units(-10))).is_err());
        assert_eq!(cart.tip(), Tip::Thirty);
    }

    #[test]
    fn test_delivery_fee_tracks_subtotal() {
        let mut cart = Cart::new();
        cart.add_item(dish("1", 499), 1).unwrap();
        assert_eq!(cart.pricing().delivery_fee.units(), 40);

        cart.add_item(dish("2", 1), 1).unwrap();
        assert_eq!(cart.pricing().delivery_fee.units(), 0);

        cart.decrease_quantity("2").unwrap();
        assert_eq!(cart.pricing().delivery_fee.units(), 40);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(dish("1", 100), 2).unwrap();
        cart.apply_coupon("SAVE10").unwrap();
        cart.set_tip(Tip::Fifty).unwrap();

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.coupon(), None);
        assert_eq!(cart.tip(), Tip::NoTip);
    }

    #[test]
    fn test_add_huge_delta_to_existing_line() {
        let mut cart = Cart::new();
        cart.add_item(dish("dal", 100), 1).unwrap();

        assert_eq!(
            cart.add_item(dish("dal", 100), i64::MAX),
            Err(CoreError::QuantityTooLarge {
                requested: i64::MAX,
                max: crate::MAX_ITEM_QUANTITY,
            })
        );
        assert_eq!(cart.get("dal").map(|i| i.quantity), Some(1));
    }

    #[test]
    fn test_add_rejects_price_above_cap() {
        let mut cart = Cart::new();
        let err = cart.add_item(dish("gold", i64::MAX / 2 + 1), 2).unwrap_err();

        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::TooLarge { max: 100_000, .. })
        ));
        assert!(cart.is_empty());

        cart.add_item(dish("thali", 100_000), 999).unwrap();
        assert_eq!(cart.pricing().subtotal, Money::from_units(99_900_000));
    }

    #[test]
    fn test_set_tip_rejects_amount_above_cap() {
        let mut cart = Cart::new();
        cart.add_item(dish("1", 200), 1).unwrap();
        cart.set_tip(Tip::Fifty).unwrap();

        assert!(matches!(
            cart.set_tip(Tip::Custom(Money::from_units(i64::MAX))),
            Err(CoreError::Validation(ValidationError::TooLarge { max: 10_000, .. }))
        ));
        assert_eq!(cart.tip(), Tip::Fifty);
        assert_eq!(cart.pricing().tip, Money::from_units(50));
    }
}
