//! # Configuration State
//!
//! Display and behavior settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOCKROOM_*`)
//! 2. Config file (`stockroom.toml`)
//! 3. Defaults (this file)
//!
//! ## Configuration File Format
//! ```toml
//! # stockroom.toml
//! currency_symbol = "₱"
//! price_decimals = 2
//! confirm_removals = true
//! ```
//!
//! The file is looked up at `$STOCKROOM_CONFIG` if set, else in the
//! platform config directory (e.g. `~/.config/stockroom/stockroom.toml` on
//! Linux). A missing file is not an error.
//!
//! Configuration is read-only after startup.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};

/// Env var naming an explicit config file.
pub const CONFIG_PATH_VAR: &str = "STOCKROOM_CONFIG";

/// Upper bound for `price_decimals`.
pub const MAX_PRICE_DECIMALS: u8 = 6;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigState {
    /// Prefix for prices in tables and blocks.
    pub currency_symbol: String,

    /// Digits after the decimal point when showing prices.
    pub price_decimals: u8,

    /// Ask "Confirm removal? (y/n)" before removing a product.
    pub confirm_removals: bool,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            currency_symbol: "₱".to_string(),
            price_decimals: 2,
            confirm_removals: true,
        }
    }
}

impl ConfigState {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    fn load_with<F>(config_path: Option<PathBuf>, lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let path = config_path
            .or_else(|| lookup(CONFIG_PATH_VAR).map(PathBuf::from))
            .or_else(Self::default_config_path);

        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(lookup);
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AppResult<()> {
        if self.price_decimals > MAX_PRICE_DECIMALS {
            return Err(AppError::Config(format!(
                "price_decimals must be at most {}, got {}",
                MAX_PRICE_DECIMALS, self.price_decimals
            )));
        }

        Ok(())
    }

    /// Applies `STOCKROOM_*` overrides. Unparsable values are ignored.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(symbol) = lookup("STOCKROOM_CURRENCY_SYMBOL") {
            debug!(symbol = %symbol, "Overriding currency symbol from environment");
            self.currency_symbol = symbol;
        }

        if let Some(decimals) = lookup("STOCKROOM_PRICE_DECIMALS") {
            match decimals.parse::<u8>() {
                Ok(d) => self.price_decimals = d,
                Err(_) => warn!(value = %decimals, "Ignoring invalid STOCKROOM_PRICE_DECIMALS"),
            }
        }

        if let Some(confirm) = lookup("STOCKROOM_CONFIRM_REMOVALS") {
            match parse_flag(&confirm) {
                Some(flag) => self.confirm_removals = flag,
                None => warn!(value = %confirm, "Ignoring invalid STOCKROOM_CONFIRM_REMOVALS"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("org", "stockroom", "stockroom")
            .map(|dirs| dirs.config_dir().join("stockroom.toml"))
    }

    /// Formats a price with the configured symbol and precision.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_console::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_price(9.99), "₱9.99");
    /// assert_eq!(config.format_price(3.0), "₱3.00");
    /// ```
    pub fn format_price(&self, price: f64) -> String {
        format!(
            "{}{:.*}",
            self.currency_symbol,
            self.price_decimals as usize,
            price
        )
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
