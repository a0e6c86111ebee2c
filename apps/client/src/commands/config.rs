//! # Config Commands

use tracing::debug;

use crate::state::ClientConfig;

/// Gets the current client configuration.
///
/// ## When Used
/// - App startup (currency symbol, app name)
/// - Order confirmation screen (delivery estimate)
pub fn get_config(config: &ClientConfig) -> ClientConfig {
    debug!("get_config command");
    config.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_returns_copy() {
        let config = ClientConfig::default();
        let json = serde_json::to_value(get_config(&config)).unwrap();
        assert_eq!(json["notificationDurationMs"], 4000);
        assert_eq!(json["deliveryEta"], "20-30 minutes");
    }
}
