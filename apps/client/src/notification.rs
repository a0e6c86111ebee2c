//! # Cart Notification
//!
//! The "Added to cart" banner that slides up after a dish is added.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  show(A) ──► visible(A) ──── duration elapses ────► hidden              │
//! │                  │                                                      │
//! │                  ├── show(B) ──► pending hide cancelled,                │
//! │                  │               visible(B), timer restarts             │
//! │                  │                                                      │
//! │                  ├── dismiss() ──► hidden, timer cancelled              │
//! │                  │                                                      │
//! │                  └── notifier dropped ──► timer cancelled               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The hide is a single-shot tokio task. Showing the banner outside a tokio
//! runtime still works; the banner then stays up until dismissed.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::Serialize;
use tiffin_core::Money;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use ts_rs::TS;

use crate::state::lock;

/// What the banner shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartBanner {
    /// Name of the dish that was just added.
    pub item_name: String,
    /// Units across the whole cart.
    pub total_items: i64,
    /// Cart subtotal.
    pub total_amount: Money,
}

#[derive(Debug, Default)]
struct BannerSlot {
    banner: Option<CartBanner>,
    /// Bumped on every show/dismiss so a stale timer never hides a newer banner.
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

impl BannerSlot {
    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

/// Owns the banner and its auto-dismiss timer.
#[derive(Debug)]
pub struct CartNotifier {
    duration: Duration,
    slot: Arc<Mutex<BannerSlot>>,
}

impl CartNotifier {
    pub fn new(duration: Duration) -> Self {
        CartNotifier {
            duration,
            slot: Arc::new(Mutex::new(BannerSlot::default())),
        }
    }

    /// Shows a banner, replacing any banner already up.
    pub fn show(&self, banner: CartBanner) {
        let mut slot = lock(&self.slot);
        slot.cancel_pending();
        slot.generation += 1;
        debug!(item = %banner.item_name, "Showing cart banner");
        slot.banner = Some(banner);

        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                warn!("No async runtime, cart banner will not auto-dismiss");
                return;
            }
        };

        let generation = slot.generation;
        let shared = Arc::clone(&self.slot);
        let duration = self.duration;

        slot.pending = Some(handle.spawn(async move {
            tokio::time::sleep(duration).await;

            let mut slot = lock(&shared);
            if slot.generation == generation {
                slot.banner = None;
                slot.pending = None;
                debug!("Cart banner auto-dismissed");
            }
        }));
    }

    /// Hides the banner now (e.g. the user tapped "VIEW CART").
    pub fn dismiss(&self) {
        let mut slot = lock(&self.slot);
        slot.cancel_pending();
        slot.generation += 1;
        slot.banner = None;
    }

    /// The banner currently up, if any.
    pub fn current(&self) -> Option<CartBanner> {
        lock(&self.slot).banner.clone()
    }

    pub fn is_visible(&self) -> bool {
        lock(&self.slot).banner.is_some()
    }
}

impl Drop for CartNotifier {
    fn drop(&mut self) {
        lock(&self.slot).cancel_pending();
    }
}
