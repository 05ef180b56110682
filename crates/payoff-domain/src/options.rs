//! Repayment policy supplied alongside the debt list.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::Money;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
/// Strategy deciding which debt receives the extra payment each month.
pub enum PayoffMethod {
    /// Highest APR first.
    #[default]
    Avalanche,
    /// Smallest balance first.
    Snowball,
    /// Caller-supplied order.
    Custom,
}

impl PayoffMethod {
    pub fn label(self) -> &'static str {
        match self {
            PayoffMethod::Avalanche => "avalanche",
            PayoffMethod::Snowball => "snowball",
            PayoffMethod::Custom => "custom",
        }
    }
}

impl fmt::Display for PayoffMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PayoffMethod {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "avalanche" => Ok(PayoffMethod::Avalanche),
            "snowball" => Ok(PayoffMethod::Snowball),
            "custom" => Ok(PayoffMethod::Custom),
            other => Err(format!("unknown payoff method `{}`", other)),
        }
    }
}

/// One-time extra payment applied in the month containing `date`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LumpSum {
    pub amount: Money,
    pub date: NaiveDate,
}

/// Options controlling a single payoff simulation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayoffOptions {
    pub method: PayoffMethod,
    /// Extra budget available every month, in minor units.
    #[serde(default)]
    pub extra_per_month: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lump_sum: Option<LumpSum>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round_up_to_nearest: Option<Money>,
    /// Roll the minimum payment of every paid-off debt into the extra budget.
    #[serde(default = "PayoffOptions::default_keep_minimums")]
    pub keep_minimums: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_order: Vec<Uuid>,
}

impl Default for PayoffOptions {
    fn default() -> Self {
        Self::new(PayoffMethod::default(), 0)
    }
}

impl PayoffOptions {
    pub fn new(method: PayoffMethod, extra_per_month: Money) -> Self {
        Self {
            method,
            extra_per_month,
            lump_sum: None,
            round_up_to_nearest: None,
            keep_minimums: Self::default_keep_minimums(),
            custom_order: Vec::new(),
        }
    }

    pub fn default_keep_minimums() -> bool {
        true
    }

    pub fn custom(order: Vec<Uuid>, extra_per_month: Money) -> Self {
        Self {
            custom_order: order,
            ..Self::new(PayoffMethod::Custom, extra_per_month)
        }
    }

    pub fn with_lump_sum(mut self, amount: Money, date: NaiveDate) -> Self {
        self.lump_sum = Some(LumpSum { amount, date });
        self
    }

    pub fn with_round_up(mut self, unit: Money) -> Self {
        self.round_up_to_nearest = Some(unit);
        self
    }

    pub fn with_keep_minimums(mut self, keep: bool) -> Self {
        self.keep_minimums = keep;
        self
    }
}
