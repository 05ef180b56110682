//! Avalanche vs. snowball comparison and recommendation.

use chrono::NaiveDate;
use payoff_domain::{
    ComparisonResult, ComparisonSavings, DebtAccount, Money, PayoffMethod, PayoffOptions,
    StrategySummary,
};
use tracing::info;

use crate::{
    scheduler::PayoffScheduler,
    state::DebtArena,
    strategy::StrategyOrderer,
    time::{Clock, SystemClock},
    validation::{validate_debts, validate_options},
    PayoffError,
};

/// Avalanche is recommended only when it saves strictly more than this share
/// (in percent) of its own interest cost.
pub const AVALANCHE_SAVINGS_THRESHOLD_PERCENT: Money = 3;

pub struct ComparisonReporter;

impl ComparisonReporter {
    /// Compares both strategies starting from today's date.
    pub fn compare_strategies(
        debts: &[DebtAccount],
        extra_per_month: Money,
    ) -> Result<ComparisonResult, PayoffError> {
        Self::compare_strategies_from(debts, extra_per_month, SystemClock.today())
    }

    pub fn compare_strategies_from(
        debts: &[DebtAccount],
        extra_per_month: Money,
        start_date: NaiveDate,
    ) -> Result<ComparisonResult, PayoffError> {
        validate_debts(debts)?;
        let arena = DebtArena::new(debts);
        let avalanche =
            Self::summarize(&arena, PayoffMethod::Avalanche, extra_per_month, start_date)?;
        let snowball =
            Self::summarize(&arena, PayoffMethod::Snowball, extra_per_month, start_date)?;

        let savings = ComparisonSavings {
            interest: snowball.total_interest - avalanche.total_interest,
            months: snowball.total_months as i64 - avalanche.total_months as i64,
        };
        let recommendation = Self::recommend(savings.interest, avalanche.total_interest);
        info!(
            %recommendation,
            interest_savings = savings.interest,
            month_savings = savings.months,
            "compared payoff strategies"
        );

        Ok(ComparisonResult {
            avalanche,
            snowball,
            recommendation,
            savings,
        })
    }

    /// `savings / avalanche_interest > 0.03`, evaluated exactly in integers.
    pub fn recommend(interest_savings: Money, avalanche_interest: Money) -> PayoffMethod {
        let lhs = interest_savings as i128 * 100;
        let rhs = avalanche_interest as i128 * AVALANCHE_SAVINGS_THRESHOLD_PERCENT as i128;
        if lhs > rhs {
            PayoffMethod::Avalanche
        } else {
            PayoffMethod::Snowball
        }
    }

    fn summarize(
        arena: &DebtArena<'_>,
        method: PayoffMethod,
        extra_per_month: Money,
        start_date: NaiveDate,
    ) -> Result<StrategySummary, PayoffError> {
        let options = PayoffOptions::new(method, extra_per_month);
        validate_options(&options)?;
        let order = StrategyOrderer::order_indices(arena, method, &[])?;
        let run = PayoffScheduler::run(arena, &order, &options, start_date);
        Ok(StrategySummary {
            method,
            total_interest: run.total_interest,
            total_months: run.months,
            outcome: run.outcome,
        })
    }
}
