//! Up-front input checks. Every failure here is reported before any month is simulated.

use std::collections::HashSet;

use payoff_domain::{DebtAccount, PayoffOptions};

use crate::PayoffError;

pub fn validate_debts(debts: &[DebtAccount]) -> Result<(), PayoffError> {
    if debts.is_empty() {
        return Err(PayoffError::InvalidOptions(
            "at least one debt is required".into(),
        ));
    }

    let mut seen = HashSet::with_capacity(debts.len());
    for debt in debts {
        if !seen.insert(debt.id) {
            return Err(PayoffError::Validation(format!(
                "debt id {} appears more than once",
                debt.id
            )));
        }
        if debt.principal_balance < 0 {
            return Err(PayoffError::Validation(format!(
                "debt `{}` has a negative balance",
                debt.name
            )));
        }
        if debt.apr.is_negative() {
            return Err(PayoffError::Validation(format!(
                "debt `{}` has a negative APR",
                debt.name
            )));
        }
        if debt.min_payment < 0 {
            return Err(PayoffError::Validation(format!(
                "debt `{}` has a negative minimum payment",
                debt.name
            )));
        }
    }

    let currency = &debts[0].currency;
    if let Some(other) = debts
        .iter()
        .find(|debt| !debt.currency.eq_ignore_ascii_case(currency))
    {
        return Err(PayoffError::Validation(format!(
            "debt `{}` is in {} but the plan is in {}",
            other.name, other.currency, currency
        )));
    }
    Ok(())
}

pub fn validate_options(options: &PayoffOptions) -> Result<(), PayoffError> {
    if options.extra_per_month < 0 {
        return Err(PayoffError::Validation(
            "extra payment per month cannot be negative".into(),
        ));
    }
    if let Some(lump) = options.lump_sum {
        if lump.amount < 0 {
            return Err(PayoffError::Validation(
                "lump sum amount cannot be negative".into(),
            ));
        }
    }
    if let Some(unit) = options.round_up_to_nearest {
        if unit <= 0 {
            return Err(PayoffError::Validation(
                "round-up unit must be a positive amount".into(),
            ));
        }
    }
    Ok(())
}
