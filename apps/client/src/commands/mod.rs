//! # Client Commands
//!
//! Every operation the display layer can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── catalog.rs  ◄─── Restaurants, dishes, search, favourites
//! ├── cart.rs     ◄─── Cart ledger manipulation
//! ├── session.rs  ◄─── Login / logout
//! ├── order.rs    ◄─── Order placement
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## State Injection
//! Each command borrows only the state it needs:
//! ```rust,ignore
//! // Only needs the cart
//! fn get_cart(cart: &CartState) -> CartResponse
//!
//! // Needs the catalog to resolve the dish, the cart, and the banner
//! fn add_to_cart(catalog: &CatalogState, cart: &CartState, notifier: &CartNotifier, ...)
//!
//! // Needs the session to check login
//! fn place_order(session: &SessionState, cart: &CartState, config: &ClientConfig)
//! ```
//!
//! ## Error Handling
//! Fallible commands return `Result<T, ApiError>`; the error serializes to
//! `{ code, message }` so the display layer can show it inline.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod order;
pub mod session;

pub use cart::*;
pub use catalog::*;
pub use config::*;
pub use order::*;
pub use session::*;
