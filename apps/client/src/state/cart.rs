//! # Cart State
//!
//! Holds the session's cart ledger.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Display Action          Command                 Ledger Change          │
//! │  ──────────────          ───────                 ─────────────          │
//! │                                                                         │
//! │  Tap "Add" ─────────────► add_to_cart() ───────► add_item(item, n)     │
//! │                                                                         │
//! │  Tap "−" ───────────────► decrease_cart_item() ► decrease_quantity(id) │
//! │                                                                         │
//! │  Tap "Remove" ──────────► remove_from_cart() ──► remove_item(id)       │
//! │                                                                         │
//! │  Enter coupon ──────────► apply_coupon() ──────► apply_coupon(code)    │
//! │                                                                         │
//! │  Place order ───────────► place_order() ───────► clear()               │
//! │                                                                         │
//! │  NOTE: All write operations acquire the Mutex lock exclusively.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use tiffin_core::Cart;

use super::lock;

/// Client-managed cart state.
///
/// Uses `Arc<Mutex<Cart>>` so commands may be invoked from any thread;
/// only one command modifies the cart at a time.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState::default()
    }

    /// Executes a function with read access to the cart.
    ///
    /// ```rust
    /// use tiffin_client::state::CartState;
    ///
    /// let state = CartState::new();
    /// let empty = state.with_cart(|cart| cart.is_empty());
    /// assert!(empty);
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = lock(&self.cart);
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = lock(&self.cart);
        f(&mut cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiffin_core::{LineItem, Money};

    #[test]
    fn test_clones_share_one_cart() {
        let state = CartState::new();
        let other = state.clone();

        state
            .with_cart_mut(|c| c.add_item(LineItem::new("1", "Dal", Money::from_units(120)), 2))
            .unwrap();

        assert_eq!(other.with_cart(|c| c.total_quantity()), 2);
    }

    #[test]
    fn test_concurrent_adds_sum_quantities() {
        let state = CartState::new();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let state = state.clone();
                std::thread::spawn(move || {
                    state.with_cart_mut(|c| {
                        c.add_item(LineItem::new("1", "Roti", Money::from_units(15)), 1)
                    })
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap().unwrap();
        }

        state.with_cart(|c| {
            assert_eq!(c.item_count(), 1);
            assert_eq!(c.total_quantity(), 8);
        });
    }
}
