//! Stable, public-facing helpers that wrap the internal engine components.
//!
//! Frontends (CLI, HTTP wrappers, UI bindings) can rely on these functions
//! without depending on the individual scheduler, baseline, and comparison types.

use chrono::NaiveDate;
use payoff_domain::{
    Compounding, ComparisonResult, DebtAccount, Money, PaymentAllocation, PayoffOptions,
    PayoffSimulation,
};
use uuid::Uuid;

use crate::{
    allocation::AllocationService, comparison::ComparisonReporter, repository::DebtRepository,
    scheduler::PayoffScheduler, PayoffError,
};

/// Month-by-month payoff schedule for `debts` under `options`.
pub fn compute_payoff_schedule(
    debts: &[DebtAccount],
    options: &PayoffOptions,
    start_date: NaiveDate,
) -> Result<PayoffSimulation, PayoffError> {
    PayoffScheduler::compute_payoff_schedule(debts, options, start_date)
}

/// Single-month split of `payment` for one debt.
pub fn calculate_payment_allocation(
    debt: &DebtAccount,
    payment: Money,
    compounding: Compounding,
) -> Result<PaymentAllocation, PayoffError> {
    AllocationService::calculate_payment_allocation(debt, payment, compounding)
}

/// Avalanche vs. snowball with the same extra budget, starting today.
pub fn compare_strategies(
    debts: &[DebtAccount],
    extra_per_month: Money,
) -> Result<ComparisonResult, PayoffError> {
    ComparisonReporter::compare_strategies(debts, extra_per_month)
}

/// Loads the current debt snapshot from `repository` and schedules it.
pub fn api_schedule_from_repository(
    repository: &dyn DebtRepository,
    options: &PayoffOptions,
    start_date: NaiveDate,
) -> Result<PayoffSimulation, PayoffError> {
    let debts = repository.load_debts()?;
    PayoffScheduler::compute_payoff_schedule(&debts, options, start_date)
}

/// Loads the current debt snapshot from `repository` and compares strategies.
pub fn api_compare_from_repository(
    repository: &dyn DebtRepository,
    extra_per_month: Money,
    start_date: NaiveDate,
) -> Result<ComparisonResult, PayoffError> {
    let debts = repository.load_debts()?;
    ComparisonReporter::compare_strategies_from(&debts, extra_per_month, start_date)
}

/// Previews a payment against a single debt loaded from `repository`.
pub fn api_allocate_from_repository(
    repository: &dyn DebtRepository,
    debt_id: Uuid,
    payment: Money,
    compounding: Compounding,
) -> Result<PaymentAllocation, PayoffError> {
    let debts = repository.load_debts()?;
    let debt = debts
        .iter()
        .find(|debt| debt.id == debt_id)
        .ok_or_else(|| PayoffError::InvalidOptions(format!("debt {} not found", debt_id)))?;
    AllocationService::calculate_payment_allocation(debt, payment, compounding)
}
