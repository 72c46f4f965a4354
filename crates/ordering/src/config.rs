//! Application configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `LITTLE_LEMON_MENU_URL` - Menu feed endpoint (default: the published
//!   Little Lemon menu JSON)
//! - `LITTLE_LEMON_DELIVERY_FEE` - Flat delivery fee (default: 2.00)
//! - `LITTLE_LEMON_SERVICE_FEE` - Flat service fee (default: 1.00)
//! - `LITTLE_LEMON_FETCH_TIMEOUT_SECS` - Feed fetch timeout (default: 10)

use std::time::Duration;

use little_lemon_core::Price;
use rust_decimal::Decimal;
use thiserror::Error;
use url::Url;

/// Default menu feed endpoint.
pub const DEFAULT_MENU_URL: &str =
    "https://raw.githubusercontent.com/Meta-Mobile-Developer-PC/Working-With-Data-API/main/menu.json";

const DEFAULT_DELIVERY_FEE: Price = Price::new(Decimal::from_parts(200, 0, 0, false, 2));
const DEFAULT_SERVICE_FEE: Price = Price::new(Decimal::from_parts(100, 0, 0, false, 2));
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Application configuration.
///
/// The delivery and service fees are the two externally-configured flat
/// fees added on top of the cart subtotal at checkout; they are deliberate
/// configuration, not ledger constants.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Menu feed endpoint.
    pub menu_url: Url,
    /// Flat delivery fee added to every order.
    pub delivery_fee: Price,
    /// Flat service fee added to every order.
    pub service_fee: Price,
    /// Timeout for a single feed fetch.
    pub fetch_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            menu_url: Url::parse(DEFAULT_MENU_URL).expect("default menu URL is valid"),
            delivery_fee: DEFAULT_DELIVERY_FEE,
            service_fee: DEFAULT_SERVICE_FEE,
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid (bad URL,
    /// negative or unparsable fee, unparsable timeout).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let menu_url = parse_url(
            "LITTLE_LEMON_MENU_URL",
            &get_env_or_default("LITTLE_LEMON_MENU_URL", DEFAULT_MENU_URL),
        )?;
        let delivery_fee = parse_fee(
            "LITTLE_LEMON_DELIVERY_FEE",
            &get_env_or_default("LITTLE_LEMON_DELIVERY_FEE", "2.00"),
        )?;
        let service_fee = parse_fee(
            "LITTLE_LEMON_SERVICE_FEE",
            &get_env_or_default("LITTLE_LEMON_SERVICE_FEE", "1.00"),
        )?;
        let timeout_secs = parse_secs(
            "LITTLE_LEMON_FETCH_TIMEOUT_SECS",
            &get_env_or_default("LITTLE_LEMON_FETCH_TIMEOUT_SECS", "10"),
        )?;

        Ok(Self {
            menu_url,
            delivery_fee,
            service_fee,
            fetch_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a URL-valued variable.
fn parse_url(key: &str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Parse a fee-valued variable. Fees must parse as decimals and must not be
/// negative.
fn parse_fee(key: &str, value: &str) -> Result<Price, ConfigError> {
    let amount: Decimal = value
        .trim()
        .parse()
        .map_err(|e: rust_decimal::Error| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if amount.is_sign_negative() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("fee must not be negative (got {amount})"),
        ));
    }
    Ok(Price::new(amount))
}

/// Parse a seconds-valued variable.
fn parse_secs(key: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| {
            ConfigError::InvalidEnvVar(key.to_string(), e.to_string())
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.menu_url.as_str(), DEFAULT_MENU_URL);
        assert_eq!(config.delivery_fee, Price::parse_lenient("2.00"));
        assert_eq!(config.service_fee, Price::parse_lenient("1.00"));
        assert_eq!(config.fetch_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_parse_fee_valid() {
        assert_eq!(
            parse_fee("TEST_FEE", "2.50").unwrap(),
            Price::parse_lenient("2.50")
        );
        assert_eq!(parse_fee("TEST_FEE", "0").unwrap(), Price::ZERO);
    }

    #[test]
    fn test_parse_fee_rejects_garbage_and_negatives() {
        assert!(parse_fee("TEST_FEE", "free").is_err());
        assert!(parse_fee("TEST_FEE", "-1.00").is_err());
    }

    #[test]
    fn test_parse_url_rejects_garbage() {
        assert!(parse_url("TEST_URL", "not a url").is_err());
        assert!(parse_url("TEST_URL", "https://example.com/menu.json").is_ok());
    }

    #[test]
    fn test_parse_secs() {
        assert_eq!(parse_secs("TEST_SECS", "30").unwrap(), 30);
        assert!(parse_secs("TEST_SECS", "soon").is_err());
    }
}
