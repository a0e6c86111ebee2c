//! # Order Commands
//!
//! Turns the cart into a placed order.
//!
//! ## Order Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "Place Order" tapped                                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌───────────────────┐  no   ┌──────────────────────────┐               │
//! │  │ Logged in?        │──────►│ UNAUTHORIZED             │               │
//! │  └─────────┬─────────┘       └──────────────────────────┘               │
//! │            │ yes                                                        │
//! │            ▼                                                            │
//! │  ┌───────────────────┐  yes  ┌──────────────────────────┐               │
//! │  │ Cart empty?       │──────►│ CART_ERROR               │               │
//! │  └─────────┬─────────┘       └──────────────────────────┘               │
//! │            │ no                                                         │
//! │            ▼                                                            │
//! │  Snapshot items + pricing + coupon ──► clear cart ──► confirmation      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The snapshot and the clear happen under a single cart lock, so an item
//! added concurrently lands either in the order or in the fresh cart.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tiffin_core::{CoreError, Coupon, LineItem, PricingSnapshot};
use tracing::{debug, info};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::{CartState, ClientConfig, SessionState};

/// What the order-confirmed screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderConfirmation {
    pub order_id: String,
    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,
    /// Phone number or provider placeholder of the signed-in user.
    pub customer: String,
    pub items: Vec<LineItem>,
    pub pricing: PricingSnapshot,
    pub coupon: Option<Coupon>,
    pub delivery_eta: String,
}

/// Places an order for everything in the cart.
///
/// ## Errors
/// - `UNAUTHORIZED` when nobody is logged in
/// - `CART_ERROR` when the cart is empty
///
/// On success the cart (items, coupon and tip) is empty.
pub fn place_order(
    session: &SessionState,
    cart: &CartState,
    config: &ClientConfig,
) -> Result<OrderConfirmation, ApiError> {
    debug!("place_order command");

    let customer = session.identity().ok_or(CoreError::NotAuthenticated)?;

    let (items, pricing, coupon) = cart.with_cart_mut(|c| {
        if c.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let snapshot = (c.items().to_vec(), c.pricing(), c.coupon());
        c.clear();
        Ok(snapshot)
    })?;

    let confirmation = OrderConfirmation {
        order_id: Uuid::new_v4().to_string(),
        placed_at: Utc::now(),
        customer,
        items,
        pricing,
        coupon,
        delivery_eta: config.delivery_eta.clone(),
    };

    info!(
        order_id = %confirmation.order_id,
        items = confirmation.items.len(),
        total = %confirmation.pricing.total,
        "Order placed"
    );

    Ok(confirmation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use tiffin_core::{Money, SocialProvider, Tip};

    fn logged_in() -> SessionState {
        let session = SessionState::new();
        session.with_session_mut(|s| s.login_with_provider(SocialProvider::Google));
        session
    }

    fn filled_cart() -> CartState {
        let cart = CartState::new();
        cart.with_cart_mut(|c| {
            c.add_item(LineItem::new("thali", "Veg Thali", Money::from_units(300)), 2)
                .unwrap();
            c.apply_coupon("SAVE10").unwrap();
        });
        cart
    }

    #[test]
    fn test_place_order_snapshots_and_clears() {
        let session = logged_in();
        let cart = filled_cart();
        let config = ClientConfig::default();

        let order = place_order(&session, &cart, &config).unwrap();

        assert_eq!(order.customer, "dummy_google_user");
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.pricing.total, Money::from_units(585));
        assert_eq!(order.coupon, Some(Coupon::Save10));
        assert_eq!(order.delivery_eta, "20-30 minutes");
        assert!(Uuid::parse_str(&order.order_id).is_ok());

        cart.with_cart(|c| {
            assert!(c.is_empty());
            assert_eq!(c.coupon(), None);
            assert_eq!(c.tip(), Tip::NoTip);
        });
    }

    #[test]
    fn test_place_order_requires_login() {
        let cart = filled_cart();
        let err = place_order(&SessionState::new(), &cart, &ClientConfig::default()).unwrap_err();

        assert_eq!(err.code, ErrorCode::Unauthorized);
        cart.with_cart(|c| assert_eq!(c.item_count(), 1));
    }

    #[test]
    fn test_place_order_rejects_empty_cart() {
        let err = place_order(&logged_in(), &CartState::new(), &ClientConfig::default())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);
    }

    #[test]
    fn test_confirmation_json() {
        let order = place_order(&logged_in(), &filled_cart(), &ClientConfig::default()).unwrap();
        let json = serde_json::to_value(&order).unwrap();

        assert_eq!(json["coupon"], "SAVE10");
        assert_eq!(json["pricing"]["total"], 585);
        assert!(json["placedAt"].is_string());
    }
}
