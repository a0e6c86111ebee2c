//! # State Module
//!
//! Session state held by the client between commands.
//!
//! ## Multiple State Types
//! Instead of one global store, each concern gets its own state type and
//! each command takes only the states it needs.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐   │
//! │  │  CartState   │ │ SessionState │ │ CatalogState │ │ ClientConfig │   │
//! │  │              │ │              │ │              │ │              │   │
//! │  │  Arc<Mutex<  │ │  Arc<Mutex<  │ │  Arc<Mutex<  │ │  read-only   │   │
//! │  │    Cart>>    │ │ AuthSession>>│ │   Catalog>>  │ │              │   │
//! │  └──────────────┘ └──────────────┘ └──────────────┘ └──────────────┘   │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Mutable states are protected by Arc<Mutex<T>> for exclusive access  │
//! │  • ClientConfig is read-only after initialization                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;
mod session;

use std::sync::{Mutex, MutexGuard, PoisonError};

pub use cart::CartState;
pub use catalog::CatalogState;
pub use config::ClientConfig;
pub use session::SessionState;

/// Locks a state mutex.
///
/// The guarded values are plain data that every operation leaves
/// consistent, so a poisoned lock is still safe to read.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
