//! # Demo Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CHECKOUT_PREVIEW_AMOUNT=1000                                       │
//! │     CHECKOUT_SEASONAL_RATE_BPS=500                                     │
//! │     CHECKOUT_HOLIDAY_RATE_BPS=1500                                     │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $CHECKOUT_CONFIG, else ./checkout.toml if it exists                │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # checkout.toml
//! preview_amount = "1000"
//! seasonal_rate_bps = 500
//! holiday_rate_bps = 1500
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use checkout_core::money::{Money, Rate};

/// Env var naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "CHECKOUT_CONFIG";

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "checkout.toml";

/// Upper bound for any rate: 100%.
const MAX_RATE_BPS: u32 = 10_000;

/// Demo walkthrough settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Amount every strategy is previewed against.
    pub preview_amount: Decimal,

    /// Extra rate of the seasonal decorator in the strategy preview.
    pub seasonal_rate_bps: u32,

    /// Extra rate of the holiday decorator used for the bonus order.
    pub holiday_rate_bps: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            preview_amount: Decimal::ONE_THOUSAND,
            seasonal_rate_bps: 500,
            holiday_rate_bps: 1500,
        }
    }
}

impl DemoConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file
    /// 3. Environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let explicit = std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from);
        let mut config = Self::from_file(explicit.as_deref())?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the config file, or returns defaults if there is none.
    ///
    /// An explicit path must exist; the implicit `./checkout.toml` is
    /// optional.
    pub fn from_file(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let implicit = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !implicit.exists() {
                    debug!(path = ?implicit, "Config file not found, using defaults");
                    return Ok(Self::default());
                }
                implicit
            }
        };

        info!(?path, "Loading demo config from file");
        let contents = std::fs::read_to_string(&path)?;
        Self::from_toml(&contents)
    }

    /// Parses a TOML document. Missing keys take default values.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies overrides from a key lookup (the process environment in
    /// production, a map in tests).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("CHECKOUT_PREVIEW_AMOUNT") {
            self.preview_amount = parse_value("CHECKOUT_PREVIEW_AMOUNT", &value)?;
            debug!(preview_amount = %self.preview_amount, "Overriding preview amount from environment");
        }

        if let Some(value) = lookup("CHECKOUT_SEASONAL_RATE_BPS") {
            self.seasonal_rate_bps = parse_value("CHECKOUT_SEASONAL_RATE_BPS", &value)?;
            debug!(bps = self.seasonal_rate_bps, "Overriding seasonal rate from environment");
        }

        if let Some(value) = lookup("CHECKOUT_HOLIDAY_RATE_BPS") {
            self.holiday_rate_bps = parse_value("CHECKOUT_HOLIDAY_RATE_BPS", &value)?;
            debug!(bps = self.holiday_rate_bps, "Overriding holiday rate from environment");
        }

        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.preview_amount.is_sign_negative() {
            return Err(ConfigError::InvalidValue(format!(
                "preview_amount must not be negative, got {}",
                self.preview_amount
            )));
        }

        for (key, bps) in [
            ("seasonal_rate_bps", self.seasonal_rate_bps),
            ("holiday_rate_bps", self.holiday_rate_bps),
        ] {
            if bps > MAX_RATE_BPS {
                return Err(ConfigError::InvalidValue(format!(
                    "{} must be at most {}, got {}",
                    key, MAX_RATE_BPS, bps
                )));
            }
        }

        Ok(())
    }

    pub fn preview_amount(&self) -> Money {
        Money::new(self.preview_amount)
    }

    pub fn seasonal_rate(&self) -> Rate {
        Rate::from_bps(self.seasonal_rate_bps)
    }

    pub fn holiday_rate(&self) -> Rate {
        Rate::from_bps(self.holiday_rate_bps)
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue(format!("{}={}", key, value)))
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
