//! # Configuration State
//!
//! Stores client configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TIFFIN_*`)
//! 2. Defaults (this file)
//!
//! Pricing rules (GST, fees, coupons) are not configurable: they live in
//! `tiffin-core` as constants.
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tiffin_core::Money;
use tracing::warn;
use ts_rs::TS;

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ClientConfig {
    /// App name shown in logs and on the order screen
    pub app_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// How long the "added to cart" banner stays up, in milliseconds
    pub notification_duration_ms: u64,

    /// Delivery estimate shown on the order confirmation
    pub delivery_eta: String,
}

impl Default for ClientConfig {
    /// ## Default Values
    /// - App: "Tiffin"
    /// - Currency: ₹
    /// - Banner: 4 seconds
    /// - ETA: "20-30 minutes"
    fn default() -> Self {
        ClientConfig {
            app_name: "Tiffin".to_string(),
            currency_symbol: "₹".to_string(),
            notification_duration_ms: 4000,
            delivery_eta: "20-30 minutes".to_string(),
        }
    }
}

impl ClientConfig {
    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `TIFFIN_APP_NAME`: Override app name
    /// - `TIFFIN_CURRENCY_SYMBOL`: Override currency symbol
    /// - `TIFFIN_NOTIFICATION_MS`: Banner duration in milliseconds
    /// - `TIFFIN_DELIVERY_ETA`: Override delivery estimate text
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup (the environment, a test map).
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ClientConfig::default();

        if let Some(app_name) = lookup("TIFFIN_APP_NAME") {
            config.app_name = app_name;
        }

        if let Some(symbol) = lookup("TIFFIN_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(raw) = lookup("TIFFIN_NOTIFICATION_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.notification_duration_ms = ms,
                Err(_) => warn!(value = %raw, "Ignoring invalid TIFFIN_NOTIFICATION_MS"),
            }
        }

        if let Some(eta) = lookup("TIFFIN_DELIVERY_ETA") {
            config.delivery_eta = eta;
        }

        config
    }

    /// Banner auto-dismiss delay.
    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_duration_ms)
    }

    /// Formats an amount with the configured symbol.
    ///
    /// ```rust
    /// use tiffin_client::state::ClientConfig;
    /// use tiffin_core::Money;
    ///
    /// let config = ClientConfig::default();
    /// assert_eq!(config.format_money(Money::from_units(585)), "₹585");
    /// ```
    pub fn format_money(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        format!("{}{}{}", sign, self.currency_symbol, amount.units().abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_lookup(|_| None);
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.notification_duration(), Duration::from_secs(4));
    }

    #[test]
    fn test_overrides() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("TIFFIN_APP_NAME", "Tiffin Staging"),
            ("TIFFIN_CURRENCY_SYMBOL", "Rs."),
            ("TIFFIN_NOTIFICATION_MS", "2500"),
            ("TIFFIN_DELIVERY_ETA", "35-45 minutes"),
        ]));

        assert_eq!(config.app_name, "Tiffin Staging");
        assert_eq!(config.notification_duration_ms, 2500);
        assert_eq!(config.delivery_eta, "35-45 minutes");
        assert_eq!(config.format_money(Money::from_units(40)), "Rs.40");
    }

    #[test]
    fn test_invalid_duration_falls_back() {
        let config = ClientConfig::from_lookup(lookup_from(&[("TIFFIN_NOTIFICATION_MS", "soon")]));
        assert_eq!(config.notification_duration_ms, 4000);
    }

    #[test]
    fn test_format_money_negative() {
        let config = ClientConfig::default();
        assert_eq!(config.format_money(Money::from_units(-65)), "-₹65");
    }
}
