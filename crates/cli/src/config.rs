//! Application configuration loaded from environment variables.

use std::path::PathBuf;

use domain::Currency;
use rust_decimal::Decimal;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// CLI configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `SHOP_DATA`: dataset path (default: `"data/shop.json"`)
/// - `SHOP_CURRENCY`: display currency code (default: `"USD"`)
/// - `SHOP_TAX_RATE`: default tax percent for quotes (default: `0`)
/// - `SHOP_LOG_FORMAT`: `pretty` or `json` (default: `pretty`)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: PathBuf,
    pub currency: Currency,
    pub tax_rate_percent: Decimal,
    pub log_format: LogFormat,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults for
    /// keys that are absent or unparseable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            data_path: lookup("SHOP_DATA")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            currency: lookup("SHOP_CURRENCY")
                .and_then(|code| code.parse().ok())
                .unwrap_or(defaults.currency),
            tax_rate_percent: lookup("SHOP_TAX_RATE")
                .and_then(|rate| rate.parse().ok())
                .unwrap_or(defaults.tax_rate_percent),
            log_format: match lookup("SHOP_LOG_FORMAT").as_deref() {
                Some("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/shop.json"),
            currency: Currency::Usd,
            tax_rate_percent: Decimal::ZERO,
            log_format: LogFormat::Pretty,
            log_level: "info".to_string(),
        }
    }
}
