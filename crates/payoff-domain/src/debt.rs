//! Domain models for debt accounts and their interest rates.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

const BPS_PER_PERCENT: f64 = 100.0;
/// Twelve months of 10_000 basis points.
const MONTHLY_BPS_DIVISOR: i128 = 120_000;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
/// Enumerates the supported debt account types.
pub enum DebtKind {
    CreditCard,
    Loan,
    #[default]
    Other,
}

impl fmt::Display for DebtKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DebtKind::CreditCard => "credit_card",
            DebtKind::Loan => "loan",
            DebtKind::Other => "other",
        };
        f.write_str(label)
    }
}

/// Annual percentage rate stored as integer basis points (1800 = 18%).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[serde(transparent)]
pub struct Apr(i32);

impl Apr {
    pub const ZERO: Apr = Apr(0);

    pub fn from_bps(bps: i32) -> Self {
        Self(bps)
    }

    /// Builds an APR from a 0-100 percentage, rounding to the nearest basis point.
    pub fn from_percent(percent: f64) -> Self {
        Self((percent * BPS_PER_PERCENT).round() as i32)
    }

    pub fn bps(self) -> i32 {
        self.0
    }

    pub fn percent(self) -> f64 {
        self.0 as f64 / BPS_PER_PERCENT
    }

    /// Annual rate as a fraction (0.18 for 18%).
    pub fn fraction(self) -> f64 {
        self.0 as f64 / (BPS_PER_PERCENT * 100.0)
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Simple monthly interest `balance * apr / 12`, rounded half up to the minor unit.
    ///
    /// Saturates at `Money::MAX` for runaway balances.
    pub fn monthly_interest(self, balance: Money) -> Money {
        if balance <= 0 || self.0 <= 0 {
            return 0;
        }
        let numerator = balance as i128 * self.0 as i128;
        Money::try_from((numerator + MONTHLY_BPS_DIVISOR / 2) / MONTHLY_BPS_DIVISOR)
            .unwrap_or(Money::MAX)
    }
}

impl fmt::Display for Apr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.percent())
    }
}

/// Immutable debt record supplied to the payoff engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DebtAccount {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub kind: DebtKind,
    #[serde(default = "DebtAccount::default_currency")]
    pub currency: String,
    /// Outstanding principal in minor units.
    pub principal_balance: Money,
    pub apr: Apr,
    /// Required monthly payment in minor units.
    pub min_payment: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_limit: Option<Money>,
}

impl DebtAccount {
    pub fn new(
        name: impl Into<String>,
        kind: DebtKind,
        principal_balance: Money,
        apr: Apr,
        min_payment: Money,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            currency: Self::default_currency(),
            principal_balance,
            apr,
            min_payment,
            credit_limit: None,
        }
    }

    pub fn default_currency() -> String {
        "USD".into()
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into().to_uppercase();
        self
    }

    pub fn with_credit_limit(mut self, limit: Money) -> Self {
        self.credit_limit = Some(limit);
        self
    }

    pub fn monthly_interest(&self) -> Money {
        self.apr.monthly_interest(self.principal_balance)
    }
}
