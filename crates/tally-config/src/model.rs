use serde::{Deserialize, Serialize};
use tally_domain::UncappedOverrunPolicy;

use crate::ConfigError;

const MAX_CURRENCY_PRECISION: u8 = 6;

/// Billing preferences applied on top of the core computations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    /// Decimal places kept when statements are rounded for presentation.
    #[serde(default = "Config::default_currency_precision")]
    pub currency_precision: u8,
    #[serde(default)]
    pub uncapped_overrun: UncappedOverrunPolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional `tracing` filter directive, e.g. `tally_core=debug`.
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: Self::default_currency(),
            currency_precision: Self::default_currency_precision(),
            uncapped_overrun: UncappedOverrunPolicy::default(),
            log_filter: None,
        }
    }
}

impl Config {
    pub fn default_currency() -> String {
        "USD".into()
    }

    pub fn default_currency_precision() -> u8 {
        2
    }

    /// Rejects values the billing facade cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.currency.trim().is_empty() {
            return Err(ConfigError::Invalid("currency must not be empty".into()));
        }
        if self.currency_precision > MAX_CURRENCY_PRECISION {
            return Err(ConfigError::Invalid(format!(
                "currency precision {} exceeds maximum of {}",
                self.currency_precision, MAX_CURRENCY_PRECISION
            )));
        }
        Ok(())
    }
}
