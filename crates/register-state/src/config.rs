//! # Configuration
//!
//! Register configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`REGISTER_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use register_core::DiscountPercent;
use serde::Serialize;
use tracing::warn;

/// Environment variable holding the discount in whole percent (e.g. "20").
pub const DISCOUNT_ENV: &str = "REGISTER_DISCOUNT_PERCENT";

/// Environment variable holding the default log filter.
pub const LOG_ENV: &str = "REGISTER_LOG";

/// Default filter when neither `RUST_LOG` nor `REGISTER_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "info,register=debug";

/// Register configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterConfig {
    /// Discount every new register is opened with.
    /// Default: 0 (no discount)
    pub discount_percent: DiscountPercent,

    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for RegisterConfig {
    fn default() -> Self {
        RegisterConfig {
            discount_percent: DiscountPercent::none(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl RegisterConfig {
    /// Creates a RegisterConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `REGISTER_DISCOUNT_PERCENT`: discount in percent, 0..=100
    /// - `REGISTER_LOG`: default log filter
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source.
    ///
    /// Invalid values are logged and the default is kept.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = RegisterConfig::default();

        if let Some(raw) = lookup(DISCOUNT_ENV) {
            match parse_discount(&raw) {
                Some(discount) => config.discount_percent = discount,
                None => warn!(
                    key = DISCOUNT_ENV,
                    value = %raw,
                    "ignoring invalid discount, expected a whole number 0-100"
                ),
            }
        }

        if let Some(filter) = lookup(LOG_ENV) {
            if !filter.trim().is_empty() {
                config.log_filter = filter;
            }
        }

        config
    }
}

fn parse_discount(raw: &str) -> Option<DiscountPercent> {
    let pct = raw.trim().parse::<u8>().ok()?;
    DiscountPercent::new(pct).ok()
}
