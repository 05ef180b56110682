//! Minimum-payments-only reference run used to compute savings.

use payoff_domain::{BaselineSummary, DebtAccount, Money, PayoffOutcome};

use crate::{
    month_step::{MonthPlan, MonthStepProcessor},
    scheduler::MAX_PAYOFF_MONTHS,
    state::{DebtArena, DebtIndex, SimulationState},
    validation::validate_debts,
    PayoffError,
};

pub struct BaselineCalculator;

impl BaselineCalculator {
    /// Months and interest needed when only minimum payments are made.
    pub fn calculate(debts: &[DebtAccount]) -> Result<BaselineSummary, PayoffError> {
        validate_debts(debts)?;
        Ok(Self::run(&DebtArena::new(debts)))
    }

    /// No extra budget, no lump sum, no rounding, no rollover. The month date only
    /// feeds labels, which are discarded.
    pub(crate) fn run(arena: &DebtArena<'_>) -> BaselineSummary {
        let order: Vec<DebtIndex> = arena.indices().collect();
        let mut state = SimulationState::initial(arena);
        let mut total_interest: Money = 0;

        while !state.all_paid_off() && state.month < MAX_PAYOFF_MONTHS {
            let outcome = MonthStepProcessor::process(
                arena,
                &state,
                &order,
                MonthPlan {
                    month: state.month + 1,
                    date: chrono::NaiveDate::MIN,
                    extra_budget: 0,
                    round_up_to_nearest: None,
                },
            );
            total_interest = total_interest.saturating_add(outcome.step.total_interest);
            state = outcome.state;
        }

        let outcome = if state.all_paid_off() {
            PayoffOutcome::DebtFree
        } else {
            PayoffOutcome::CapReached {
                remaining_debt: state.remaining_debt(),
            }
        };
        BaselineSummary {
            months: state.month,
            total_interest,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use payoff_domain::{Apr, DebtKind};

    use super::*;

    #[test]
    fn zero_interest_baseline_is_balance_over_minimum() {
        let debts = vec![DebtAccount::new("Loan", DebtKind::Loan, 100_000, Apr::ZERO, 10_000)];
        let baseline = BaselineCalculator::calculate(&debts).unwrap();
        assert_eq!(baseline.months, 10);
        assert_eq!(baseline.total_interest, 0);
        assert!(baseline.outcome.is_debt_free());
    }

    #[test]
    fn baseline_does_not_roll_over_freed_minimums() {
        let debts = vec![
            DebtAccount::new("Short", DebtKind::Loan, 20_000, Apr::ZERO, 10_000),
            DebtAccount::new("Long", DebtKind::Loan, 100_000, Apr::ZERO, 10_000),
        ];
        let baseline = BaselineCalculator::calculate(&debts).unwrap();
        assert_eq!(baseline.months, 10);
    }
}
