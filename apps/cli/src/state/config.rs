//! # Configuration
//!
//! Application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SHOPKEEP_*`, plus `RUST_LOG` for logging)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after startup.

use serde::{Deserialize, Serialize};
use shopkeep_core::Money;

use crate::services::checkout::CheckoutFailurePolicy;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Store name (printed on receipts)
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Preload the demo catalog and customers
    pub seed_demo_data: bool,

    /// What checkout does with earlier stock decrements when a later line fails
    pub checkout_failure: CheckoutFailurePolicy,

    /// How the checkout receipt is printed
    pub receipt_format: ReceiptFormat,

    /// Log filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

/// Receipt output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiptFormat {
    /// Human-readable lines
    #[default]
    Text,

    /// One JSON object per receipt (and per checkout error)
    Json,
}

impl ReceiptFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Some(ReceiptFormat::Text),
            "json" => Some(ReceiptFormat::Json),
            _ => None,
        }
    }
}

impl Default for AppConfig {
    /// ## Default Values
    /// - Store: "Shopkeep"
    /// - Currency: `$`
    /// - No demo data
    /// - Checkout leaves partial decrements in place
    /// - Text receipts, `warn` logging
    fn default() -> Self {
        AppConfig {
            store_name: "Shopkeep".to_string(),
            currency_symbol: "$".to_string(),
            seed_demo_data: false,
            checkout_failure: CheckoutFailurePolicy::LeavePartial,
            receipt_format: ReceiptFormat::Text,
            log_filter: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Creates an AppConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SHOPKEEP_STORE_NAME`: Override store name
    /// - `SHOPKEEP_CURRENCY_SYMBOL`: Override currency symbol
    /// - `SHOPKEEP_SEED_DEMO`: `1`/`true` loads demo data
    /// - `SHOPKEEP_CHECKOUT_ROLLBACK`: `1`/`true` restores stock on a failed checkout
    /// - `SHOPKEEP_RECEIPT_FORMAT`: `text` or `json`
    /// - `SHOPKEEP_LOG`: default log filter (e.g. `info`, `shopkeep_cli_lib=debug`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary key lookup.
    ///
    /// Unparsable values are ignored and the default is kept.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = AppConfig::default();

        if let Some(store_name) = lookup("SHOPKEEP_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup("SHOPKEEP_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(flag) = lookup("SHOPKEEP_SEED_DEMO").and_then(|v| parse_flag(&v)) {
            config.seed_demo_data = flag;
        }

        if let Some(rollback) = lookup("SHOPKEEP_CHECKOUT_ROLLBACK").and_then(|v| parse_flag(&v)) {
            config.checkout_failure = if rollback {
                CheckoutFailurePolicy::Compensate
            } else {
                CheckoutFailurePolicy::LeavePartial
            };
        }

        if let Some(format) = lookup("SHOPKEEP_RECEIPT_FORMAT").and_then(|v| ReceiptFormat::parse(&v)) {
            config.receipt_format = format;
        }

        if let Some(filter) = lookup("SHOPKEEP_LOG") {
            config.log_filter = filter;
        }

        config
    }

    /// Formats an amount with the configured currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use shopkeep_cli_lib::state::AppConfig;
    /// use shopkeep_core::Money;
    ///
    /// let config = AppConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.checkout_failure, CheckoutFailurePolicy::LeavePartial);
        assert_eq!(config.receipt_format, ReceiptFormat::Text);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("SHOPKEEP_STORE_NAME", "Corner Shop"),
            ("SHOPKEEP_CURRENCY_SYMBOL", "€"),
            ("SHOPKEEP_SEED_DEMO", "true"),
            ("SHOPKEEP_CHECKOUT_ROLLBACK", "1"),
            ("SHOPKEEP_RECEIPT_FORMAT", "JSON"),
            ("SHOPKEEP_LOG", "debug"),
        ]);

        assert_eq!(config.store_name, "Corner Shop");
        assert_eq!(config.currency_symbol, "€");
        assert!(config.seed_demo_data);
        assert_eq!(config.checkout_failure, CheckoutFailurePolicy::Compensate);
        assert_eq!(config.receipt_format, ReceiptFormat::Json);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_unparsable_values_keep_defaults() {
        let config = config_from(&[
            ("SHOPKEEP_SEED_DEMO", "maybe"),
            ("SHOPKEEP_RECEIPT_FORMAT", "xml"),
        ]);
        assert!(!config.seed_demo_data);
        assert_eq!(config.receipt_format, ReceiptFormat::Text);
    }

    #[test]
    fn test_format_currency() {
        let mut config = AppConfig::default();
        assert_eq!(config.format_currency(Money::from_cents(2997)), "$29.97");
        assert_eq!(config.format_currency(Money::from_cents(5)), "$0.05");
        assert_eq!(config.format_currency(Money::from_cents(-1234)), "-$12.34");

        config.currency_symbol = "€".to_string();
        assert_eq!(config.format_currency(Money::from_cents(100)), "€1.00");
    }
}
