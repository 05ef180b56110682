use std::path::PathBuf;

use payoff_domain::{Money, PayoffMethod, PayoffOptions};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

const DEFAULT_DEBTS_FILE: &str = "debts.json";

/// Stores user-configurable planning defaults and CLI preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default)]
    pub default_method: PayoffMethod,
    /// Extra monthly payment in minor units used when none is given on the command line.
    #[serde(default)]
    pub default_extra_per_month: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round_up_to_nearest: Option<Money>,
    #[serde(default = "Config::default_keep_minimums")]
    pub keep_minimums: bool,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional debts file. Defaults to `<data dir>/debt-payoff/debts.json`.
    pub default_debts_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            default_method: PayoffMethod::default(),
            default_extra_per_month: 0,
            round_up_to_nearest: None,
            keep_minimums: Self::default_keep_minimums(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            default_debts_path: None,
        }
    }
}

impl Config {
    pub fn default_keep_minimums() -> bool {
        true
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn resolve_default_debts_path(&self) -> PathBuf {
        if let Some(path) = &self.default_debts_path {
            return path.clone();
        }

        let base = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("debt-payoff").join(DEFAULT_DEBTS_FILE)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_extra_per_month < 0 {
            return Err(ConfigError::Invalid {
                field: "default_extra_per_month",
                reason: "must not be negative".into(),
            });
        }
        if matches!(self.round_up_to_nearest, Some(unit) if unit <= 0) {
            return Err(ConfigError::Invalid {
                field: "round_up_to_nearest",
                reason: "must be a positive amount".into(),
            });
        }
        if self.default_method == PayoffMethod::Custom {
            return Err(ConfigError::Invalid {
                field: "default_method",
                reason: "custom needs an explicit order and cannot be a default".into(),
            });
        }
        Ok(())
    }

    /// Payoff options seeded from the stored defaults.
    pub fn payoff_options(&self) -> PayoffOptions {
        let mut options = PayoffOptions::new(self.default_method, self.default_extra_per_month)
            .with_keep_minimums(self.keep_minimums);
        options.round_up_to_nearest = self.round_up_to_nearest;
        options
    }
}
