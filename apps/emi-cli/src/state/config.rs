//! # Configuration State
//!
//! Settings that shape how results are shown.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--currency-symbol`, `--clear-on-error`)
//! 2. Environment variables (`EMI_*`)
//! 3. Defaults (this file)
//!
//! Read-only after startup.

use serde::{Deserialize, Serialize};

use emi_core::Money;

use crate::Cli;

/// Environment variable overriding the currency symbol.
pub const ENV_CURRENCY_SYMBOL: &str = "EMI_CURRENCY_SYMBOL";

/// Environment variable controlling the stale-result policy.
pub const ENV_CLEAR_ON_ERROR: &str = "EMI_CLEAR_ON_ERROR";

/// Shell configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellConfig {
    /// Currency symbol printed before every amount.
    pub currency_symbol: String,

    /// Hide the previous result when a new calculation fails.
    ///
    /// `false` keeps the old panel visible after a rejected input.
    pub clear_on_error: bool,
}

impl Default for ShellConfig {
    /// Indian rupee, stale result kept.
    fn default() -> Self {
        ShellConfig {
            currency_symbol: "₹".to_string(),
            clear_on_error: false,
        }
    }
}

impl ShellConfig {
    /// Builds the configuration from `EMI_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Unset keys and unparseable booleans fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ShellConfig::default();

        if let Some(symbol) = lookup(ENV_CURRENCY_SYMBOL) {
            config.currency_symbol = symbol;
        }

        if let Some(flag) = lookup(ENV_CLEAR_ON_ERROR).as_deref().and_then(parse_flag) {
            config.clear_on_error = flag;
        }

        config
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(symbol) = &cli.currency_symbol {
            self.currency_symbol = symbol.clone();
        }
        if cli.clear_on_error {
            self.clear_on_error = true;
        }
        self
    }

    /// Formats an amount as `<symbol> <amount>`.
    ///
    /// ## Example
    /// ```rust
    /// use emi_cli::state::ShellConfig;
    /// use emi_core::Money;
    ///
    /// let config = ShellConfig::default();
    /// assert_eq!(config.format_currency(Money::from_minor(123986)), "₹ 1239.86");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        if self.currency_symbol.is_empty() {
            return amount.to_string();
        }
        format!("{} {}", self.currency_symbol, amount)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
