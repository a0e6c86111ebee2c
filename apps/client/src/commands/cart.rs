//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Coupon / │────►│  Order   │       │
//! │  │  Cart    │     │          │     │   Tip    │     │  Placed  │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                                  │             │
//! │                   add_to_cart                       place_order        │
//! │                   decrease_cart_item                (order.rs)         │
//! │                   remove_from_cart                        │             │
//! │                        │                                  │             │
//! │                        ▼                                  ▼             │
//! │                   clear_cart ───────────────────► (back to empty)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every mutating command returns the full [`CartResponse`] so the display
//! layer never has to recompute the bill itself.

use serde::Serialize;
use tiffin_core::{Cart, CouponSlot, LineItem, PricingSnapshot, Tip};
use tracing::{debug, warn};
use ts_rs::TS;

use crate::error::ApiError;
use crate::notification::{CartBanner, CartNotifier};
use crate::state::{CartState, CatalogState};

/// Cart response including items and the derived bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartResponse {
    pub items: Vec<LineItem>,
    pub pricing: PricingSnapshot,
    pub coupon: CouponSlot,
    pub tip: Tip,
    /// Distinct dishes (the badge on the cart icon).
    pub item_count: usize,
    /// Units across all dishes.
    pub total_quantity: i64,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            pricing: cart.pricing(),
            coupon: cart.coupon_slot(),
            tip: cart.tip(),
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Adds a dish from the catalog to the cart.
///
/// ## Behavior
/// - Dish already in cart: quantity increases
/// - Dish not in cart: added as new line
/// - Price is frozen at the catalog price when the line is first created
/// - The "added to cart" banner is (re)shown with the new cart totals
///
/// ## Arguments
/// * `dish_id` - Catalog dish id
/// * `quantity` - Units to add (default: 1)
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartState,
    notifier: &CartNotifier,
    dish_id: &str,
    quantity: Option<i64>,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(dish_id = %dish_id, quantity = quantity, "add_to_cart command");

    let item = catalog.with_catalog(|c| c.dish(dish_id).map(|d| d.to_line_item()))?;
    let item_name = item.name.clone();

    let response = cart.with_cart_mut(|c| {
        c.add_item(item, quantity)?;
        Ok::<_, ApiError>(CartResponse::from(&*c))
    })?;

    notifier.show(CartBanner {
        item_name,
        total_items: response.total_quantity,
        total_amount: response.pricing.subtotal,
    });

    Ok(response)
}

/// Decreases a line's quantity by one, removing it at one.
pub fn decrease_cart_item(cart: &CartState, item_id: &str) -> Result<CartResponse, ApiError> {
    debug!(item_id = %item_id, "decrease_cart_item command");

    cart.with_cart_mut(|c| -> Result<CartResponse, ApiError> {
        c.decrease_quantity(item_id)?;
        Ok(CartResponse::from(&*c))
    })
}

/// Removes a line regardless of its quantity.
pub fn remove_from_cart(cart: &CartState, item_id: &str) -> Result<CartResponse, ApiError> {
    debug!(item_id = %item_id, "remove_from_cart command");

    cart.with_cart_mut(|c| -> Result<CartResponse, ApiError> {
        c.remove_item(item_id)?;
        Ok(CartResponse::from(&*c))
    })
}

/// Empties the cart, dropping the coupon and tip too.
pub fn clear_cart(cart: &CartState) -> CartResponse {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::from(&*c)
    })
}

/// Applies a coupon code (case-insensitive, whitespace trimmed).
///
/// An unknown code is rejected and the previously applied coupon stays.
pub fn apply_coupon(cart: &CartState, code: &str) -> Result<CartResponse, ApiError> {
    debug!(code = %code, "apply_coupon command");

    cart.with_cart_mut(|c| -> Result<CartResponse, ApiError> {
        match c.apply_coupon(code) {
            Ok(coupon) => {
                debug!(%coupon, "Coupon applied");
                Ok(CartResponse::from(&*c))
            }
            Err(e) => {
                warn!(code = %code, "Coupon rejected");
                Err(e.into())
            }
        }
    })
}

pub fn remove_coupon(cart: &CartState) -> CartResponse {
    debug!("remove_coupon command");

    cart.with_cart_mut(|c| {
        c.remove_coupon();
        CartResponse::from(&*c)
    })
}

/// Selects a tip preset, a custom amount, or no tip.
pub fn set_tip(cart: &CartState, tip: Tip) -> Result<CartResponse, ApiError> {
    debug!(?tip, "set_tip command");

    cart.with_cart_mut(|c| -> Result<CartResponse, ApiError> {
        c.set_tip(tip)?;
        Ok(CartResponse::from(&*c))
    })
}

/// Gets just the bill, for the summary row under the cart.
pub fn get_pricing(cart: &CartState) -> PricingSnapshot {
    cart.with_cart(|c| c.pricing())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::time::Duration;
    use tiffin_core::{Coupon, Money};

    struct Fixture {
        catalog: CatalogState,
        cart: CartState,
        notifier: CartNotifier,
    }

    fn fixture() -> Fixture {
        Fixture {
            catalog: CatalogState::default(),
            cart: CartState::new(),
            notifier: CartNotifier::new(Duration::from_millis(4000)),
        }
    }

    #[test]
    fn test_add_to_cart_merges_lines() {
        let f = fixture();
        add_to_cart(&f.catalog, &f.cart, &f.notifier, "1", None).unwrap();
        let response = add_to_cart(&f.catalog, &f.cart, &f.notifier, "1", Some(2)).unwrap();

        assert_eq!(response.item_count, 1);
        assert_eq!(response.total_quantity, 3);
        assert_eq!(response.pricing.subtotal, Money::from_units(747));
        assert_eq!(response.pricing.delivery_fee, Money::zero());
    }

    #[test]
    fn test_add_to_cart_shows_banner() {
        let f = fixture();
        add_to_cart(&f.catalog, &f.cart, &f.notifier, "3", Some(2)).unwrap();

        let banner = f.notifier.current().unwrap();
        assert_eq!(banner.item_name, "Double Cheese Burger");
        assert_eq!(banner.total_items, 2);
        assert_eq!(banner.total_amount, Money::from_units(398));
    }

    #[test]
    fn test_add_unknown_dish() {
        let f = fixture();
        let err = add_to_cart(&f.catalog, &f.cart, &f.notifier, "99", None).unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(get_cart(&f.cart).items.is_empty());
        assert!(!f.notifier.is_visible());
    }

    #[test]
    fn test_add_rejects_non_positive_quantity() {
        let f = fixture();
        let err = add_to_cart(&f.catalog, &f.cart, &f.notifier, "1", Some(0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_decrease_then_remove() {
        let f = fixture();
        add_to_cart(&f.catalog, &f.cart, &f.notifier, "2", Some(2)).unwrap();

        let response = decrease_cart_item(&f.cart, "2").unwrap();
        assert_eq!(response.total_quantity, 1);

        let response = decrease_cart_item(&f.cart, "2").unwrap();
        assert!(response.items.is_empty());

        let err = remove_from_cart(&f.cart, "2").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_unknown_coupon_keeps_applied() {
        let f = fixture();
        add_to_cart(&f.catalog, &f.cart, &f.notifier, "4", None).unwrap();
        apply_coupon(&f.cart, "welcome20").unwrap();

        let err = apply_coupon(&f.cart, "SAVE01").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCoupon);
        assert_eq!(get_cart(&f.cart).coupon, CouponSlot::Applied(Coupon::Welcome20));

        let response = remove_coupon(&f.cart);
        assert_eq!(response.coupon, CouponSlot::NoCoupon);
    }

    #[test]
    fn test_tip_flows_into_pricing() {
        let f = fixture();
        add_to_cart(&f.catalog, &f.cart, &f.notifier, "3", None).unwrap();

        let response = set_tip(&f.cart, Tip::Fifty).unwrap();
        // 199 + 40 delivery + 50 tip + 10 gst + 20 fee
        assert_eq!(response.pricing.total, Money::from_units(319));

        let err = set_tip(&f.cart, Tip::Custom(Money::from_units(-5))).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = set_tip(&f.cart, Tip::Custom(Money::from_units(i64::MAX))).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "tip must not exceed 10000");
        assert_eq!(get_pricing(&f.cart).tip, Money::from_units(50));
    }

    #[test]
    fn test_clear_cart_resets_everything() {
        let f = fixture();
        add_to_cart(&f.catalog, &f.cart, &f.notifier, "1", None).unwrap();
        apply_coupon(&f.cart, "SAVE10").unwrap();
        set_tip(&f.cart, Tip::Twenty).unwrap();

        let response = clear_cart(&f.cart);
        assert!(response.items.is_empty());
        assert_eq!(response.coupon, CouponSlot::NoCoupon);
        assert_eq!(response.tip, Tip::NoTip);
    }
}
