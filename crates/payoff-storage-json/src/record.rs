//! Loose, display-unit debt records as users and onboarding flows write them.
//!
//! Amounts are in major units (dollars) and APR is a 0-100 percentage. Conversion
//! to [`DebtAccount`] happens here so the engine only ever sees minor units.

use payoff_domain::{
    currency_precision, from_minor_units, to_minor_units, Apr, DebtAccount, DebtKind,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::StorageError;

pub const DEBT_FILE_SCHEMA_VERSION: u32 = 1;
/// APR percentages accepted from debt files.
const APR_PERCENT_RANGE: std::ops::RangeInclusive<f64> = 0.0..=100.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DebtRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub balance: f64,
    pub apr: f64,
    #[serde(alias = "minimum_payment")]
    pub min_payment: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_limit: Option<f64>,
}

/// Accepts both a bare list of records and the versioned envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DebtFile {
    Versioned { version: u32, debts: Vec<DebtRecord> },
    Bare(Vec<DebtRecord>),
}

impl DebtFile {
    pub fn records(self) -> Vec<DebtRecord> {
        match self {
            DebtFile::Versioned { debts, .. } | DebtFile::Bare(debts) => debts,
        }
    }
}

impl DebtRecord {
    pub fn into_account(self) -> Result<DebtAccount, StorageError> {
        for (label, value) in [
            ("balance", self.balance),
            ("apr", self.apr),
            ("min_payment", self.min_payment),
        ] {
            if !value.is_finite() {
                return Err(StorageError::InvalidRecord {
                    name: self.name.clone(),
                    reason: format!("{} is not a number", label),
                });
            }
        }
        if !APR_PERCENT_RANGE.contains(&self.apr) {
            return Err(StorageError::InvalidRecord {
                name: self.name.clone(),
                reason: format!("apr {} is outside 0-100%", self.apr),
            });
        }

        let currency = self
            .currency
            .as_deref()
            .map(str::to_uppercase)
            .unwrap_or_else(DebtAccount::default_currency);
        let precision = currency_precision(&currency);
        let kind = self.kind.as_deref().map(parse_kind).unwrap_or_default();

        let mut account = DebtAccount::new(
            self.name,
            kind,
            to_minor_units(self.balance, precision),
            Apr::from_percent(self.apr),
            to_minor_units(self.min_payment, precision),
        )
        .with_currency(currency);
        if let Some(id) = self.id {
            account.id = id;
        }
        account.credit_limit = self
            .credit_limit
            .filter(|limit| limit.is_finite())
            .map(|limit| to_minor_units(limit, precision));
        Ok(account)
    }

    pub fn from_account(account: &DebtAccount) -> Self {
        let precision = currency_precision(&account.currency);
        Self {
            id: Some(account.id),
            name: account.name.clone(),
            kind: Some(account.kind.to_string()),
            currency: Some(account.currency.clone()),
            balance: from_minor_units(account.principal_balance, precision),
            apr: account.apr.percent(),
            min_payment: from_minor_units(account.min_payment, precision),
            credit_limit: account
                .credit_limit
                .map(|limit| from_minor_units(limit, precision)),
        }
    }
}

fn parse_kind(value: &str) -> DebtKind {
    match value
        .trim()
        .to_ascii_lowercase()
        .replace([' ', '-'], "_")
        .as_str()
    {
        "credit_card" | "card" | "creditcard" => DebtKind::CreditCard,
        "loan" | "student_loan" | "auto_loan" | "personal_loan" | "mortgage" => DebtKind::Loan,
        _ => DebtKind::Other,
    }
}
