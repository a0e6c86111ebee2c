//! # tiffin-client: Client State and Commands
//!
//! The layer the display screens talk to. It owns the session state, exposes
//! one command per user action, and runs the "added to cart" banner timer.
//! Every pricing and cart rule lives in `tiffin-core`.
//!
//! ## Module Layout
//! ```text
//! apps/client/src/
//! ├── lib.rs           ◄─── You are here (state bundle, logging, demo session)
//! ├── main.rs          ◄─── Binary entry point
//! ├── error.rs         ◄─── ApiError { code, message }
//! ├── notification.rs  ◄─── Banner with single-shot auto-dismiss
//! ├── state/           ◄─── CartState, SessionState, CatalogState, ClientConfig
//! └── commands/        ◄─── cart, catalog, session, order, config
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. init_tracing()           RUST_LOG or "info,tiffin_client=debug"     │
//! │  2. ClientConfig::from_env() TIFFIN_* overrides over defaults           │
//! │  3. ClientState::new(config) empty cart, anonymous session,             │
//! │                              bundled catalog, banner notifier           │
//! │  4. commands::*              invoked per user action                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod notification;
pub mod state;

use tiffin_core::Tip;
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::OrderConfirmation;
use error::ApiError;
use notification::CartNotifier;
use state::{CartState, CatalogState, ClientConfig, SessionState};

/// Everything a running client holds.
///
/// Each command borrows only the pieces it needs, so this bundle is just
/// the owner.
#[derive(Debug)]
pub struct ClientState {
    pub cart: CartState,
    pub session: SessionState,
    pub catalog: CatalogState,
    pub config: ClientConfig,
    pub notifier: CartNotifier,
}

impl ClientState {
    pub fn new(config: ClientConfig) -> Self {
        ClientState {
            cart: CartState::new(),
            session: SessionState::new(),
            catalog: CatalogState::default(),
            notifier: CartNotifier::new(config.notification_duration()),
            config,
        }
    }
}

impl Default for ClientState {
    fn default() -> Self {
        ClientState::new(ClientConfig::default())
    }
}

/// Initializes the tracing subscriber for logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tiffin_client=trace` - Show trace for the client only
/// - Default: INFO, with DEBUG for the client
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tiffin_client=debug"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Walks through one full ordering session.
///
/// ```text
/// login (phone) ──► add Chicken Tikka Masala ──► add Pasta Primavera
///               ──► tip ₹30 ──► WELCOME20 ──► place order
/// ```
pub fn run_demo_session(state: &ClientState) -> Result<OrderConfirmation, ApiError> {
    commands::login_with_phone(&state.session, "9876543210")?;

    for dish_id in ["2", "4"] {
        commands::add_to_cart(&state.catalog, &state.cart, &state.notifier, dish_id, None)?;
    }

    commands::set_tip(&state.cart, Tip::Thirty)?;
    commands::apply_coupon(&state.cart, "WELCOME20")?;

    let pricing = commands::get_pricing(&state.cart);
    info!(
        subtotal = %state.config.format_money(pricing.subtotal),
        total = %state.config.format_money(pricing.total),
        savings = %state.config.format_money(pricing.savings),
        "Cart ready"
    );

    commands::place_order(&state.session, &state.cart, &state.config)
}

/// Binary entry: logging, config, one demo session, confirmation as JSON.
pub async fn run() -> Result<(), ApiError> {
    init_tracing();

    let config = ClientConfig::from_env();
    info!(app = %config.app_name, "Starting client");

    let state = ClientState::new(config);
    let confirmation = run_demo_session(&state)?;

    println!("{}", serde_json::to_string_pretty(&confirmation)?);
    Ok(())
}
