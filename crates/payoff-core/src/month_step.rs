//! Single-month processing: interest accrual, minimum payments, extra routing, rounding.

use chrono::NaiveDate;
use payoff_domain::{month_label, saturating_sum, DebtStepSnapshot, Money, PayoffStep};
use uuid::Uuid;

use crate::state::{DebtArena, DebtIndex, SimulationState};

/// Inputs that vary from month to month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthPlan {
    pub month: u32,
    pub date: NaiveDate,
    /// Extra budget for this month: recurring extra, lump sum, and any rolled-over minimums.
    pub extra_budget: Money,
    pub round_up_to_nearest: Option<Money>,
}

#[derive(Debug, Clone)]
pub struct MonthOutcome {
    pub state: SimulationState,
    pub step: PayoffStep,
    /// Extra budget the target debt could not absorb.
    pub unspent_extra: Money,
}

pub struct MonthStepProcessor;

impl MonthStepProcessor {
    /// First debt in `order` that is still open.
    pub fn current_target(state: &SimulationState, order: &[DebtIndex]) -> Option<DebtIndex> {
        order
            .iter()
            .copied()
            .find(|index| state.debt(*index).is_active())
    }

    /// Runs one month against `state` and returns the successor state plus the timeline step.
    ///
    /// Only the current target receives extra budget. Paid-off debts are skipped and
    /// do not appear in the step's snapshots.
    pub fn process(
        arena: &DebtArena<'_>,
        state: &SimulationState,
        order: &[DebtIndex],
        plan: MonthPlan,
    ) -> MonthOutcome {
        let target = Self::current_target(state, order);
        let mut budget = plan.extra_budget.max(0);
        let mut debts = state.debts().to_vec();
        let mut snapshots = Vec::with_capacity(debts.len());

        for index in arena.indices() {
            let current = &mut debts[index.0];
            if current.paid_off {
                continue;
            }
            let account = arena.get(index);
            let starting = current.current_balance;
            let interest = account.apr.monthly_interest(starting);
            let payoff_amount = starting.saturating_add(interest);

            let mut payment = account.min_payment.min(payoff_amount);
            if target == Some(index) && budget > 0 {
                let extra = budget.min(payoff_amount - payment);
                payment += extra;
                budget -= extra;
            }
            if let Some(unit) = plan.round_up_to_nearest {
                payment = round_up(payment, unit).min(payoff_amount);
            }

            let snapshot = Self::settle(account.id, starting, interest, payment);
            current.current_balance = snapshot.ending_balance;
            if snapshot.paid_off {
                current.paid_off = true;
                current.paid_off_in = Some(plan.month);
            }
            snapshots.push(snapshot);
        }

        let next = SimulationState::next(plan.month, debts);
        let step = PayoffStep {
            month: plan.month,
            label: month_label(plan.date),
            date: plan.date,
            total_payment: saturating_sum(snapshots.iter().map(|entry| entry.payment)),
            total_interest: saturating_sum(snapshots.iter().map(|entry| entry.interest_portion)),
            total_principal: saturating_sum(snapshots.iter().map(|entry| entry.principal_portion)),
            remaining_debt: next.remaining_debt(),
            debts: snapshots,
        };
        MonthOutcome {
            state: next,
            step,
            unspent_extra: budget,
        }
    }

    /// Splits `payment` against a balance that has accrued `interest` this month.
    ///
    /// A payment below the interest charge yields a negative principal portion and
    /// a growing balance, which saturates at `Money::MAX`.
    pub fn settle(
        debt_id: Uuid,
        starting_balance: Money,
        interest: Money,
        payment: Money,
    ) -> DebtStepSnapshot {
        let principal = payment.saturating_sub(interest);
        let ending = starting_balance.saturating_sub(principal).max(0);
        DebtStepSnapshot {
            debt_id,
            starting_balance,
            payment,
            interest_portion: interest,
            principal_portion: principal,
            ending_balance: ending,
            paid_off: ending == 0,
        }
    }
}

fn round_up(amount: Money, unit: Money) -> Money {
    if amount <= 0 || unit <= 0 {
        return amount;
    }
    match amount % unit {
        0 => amount,
        rem => amount.saturating_add(unit - rem),
    }
}

#[cfg(test)]
mod tests {
    use payoff_domain::{Apr, DebtAccount, DebtKind};

    use super::*;

    fn plan(extra: Money) -> MonthPlan {
        MonthPlan {
            month: 1,
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            extra_budget: extra,
            round_up_to_nearest: None,
        }
    }

    #[test]
    fn interest_accrues_before_payment() {
        let debts = vec![DebtAccount::new(
            "Card",
            DebtKind::CreditCard,
            100_000,
            Apr::from_percent(12.0),
            5_000,
        )];
        let arena = DebtArena::new(&debts);
        let state = SimulationState::initial(&arena);
        let outcome = MonthStepProcessor::process(&arena, &state, &[DebtIndex(0)], plan(0));
        let entry = &outcome.step.debts[0];
        assert_eq!(entry.interest_portion, 1_000);
        assert_eq!(entry.principal_portion, 4_000);
        assert_eq!(entry.ending_balance, 96_000);
        assert_eq!(outcome.state.debt(DebtIndex(0)).current_balance, 96_000);
        assert_eq!(state.debt(DebtIndex(0)).current_balance, 100_000);
    }

    #[test]
    fn extra_goes_only_to_target_and_is_capped_at_payoff() {
        let debts = vec![
            DebtAccount::new("Small", DebtKind::Loan, 3_000, Apr::ZERO, 1_000),
            DebtAccount::new("Large", DebtKind::Loan, 50_000, Apr::ZERO, 1_000),
        ];
        let arena = DebtArena::new(&debts);
        let state = SimulationState::initial(&arena);
        let order = [DebtIndex(0), DebtIndex(1)];
        let outcome = MonthStepProcessor::process(&arena, &state, &order, plan(10_000));
        assert_eq!(outcome.step.debts[0].payment, 3_000);
        assert!(outcome.step.debts[0].paid_off);
        assert_eq!(outcome.step.debts[1].payment, 1_000);
        assert_eq!(outcome.unspent_extra, 8_000);
        assert_eq!(outcome.step.remaining_debt, 49_000);
    }

    #[test]
    fn rounding_never_overpays() {
        let debts = vec![DebtAccount::new("Loan", DebtKind::Loan, 10_250, Apr::ZERO, 9_510)];
        let arena = DebtArena::new(&debts);
        let state = SimulationState::initial(&arena);
        let mut month = plan(0);
        month.round_up_to_nearest = Some(5_000);
        let outcome = MonthStepProcessor::process(&arena, &state, &[DebtIndex(0)], month);
        assert_eq!(outcome.step.debts[0].payment, 10_000);

        let outcome =
            MonthStepProcessor::process(&arena, &outcome.state, &[DebtIndex(0)], month);
        assert_eq!(outcome.step.debts[0].payment, 250);
        assert!(outcome.step.debts[0].paid_off);
    }

    #[test]
    fn underfunded_debt_grows() {
        let snapshot = MonthStepProcessor::settle(Uuid::new_v4(), 100_000, 2_000, 1_000);
        assert_eq!(snapshot.principal_portion, -1_000);
        assert_eq!(snapshot.ending_balance, 101_000);
        assert!(!snapshot.paid_off);
    }

    #[test]
    fn runaway_balance_saturates_instead_of_overflowing() {
        let snapshot =
            MonthStepProcessor::settle(Uuid::new_v4(), Money::MAX - 10, Money::MAX / 12, 5_000);
        assert_eq!(snapshot.ending_balance, Money::MAX);
        assert!(!snapshot.paid_off);

        let debts = vec![DebtAccount::new(
            "Runaway",
            DebtKind::CreditCard,
            Money::MAX,
            Apr::from_percent(100.0),
            5_000,
        )];
        let arena = DebtArena::new(&debts);
        let state = SimulationState::initial(&arena);
        let outcome = MonthStepProcessor::process(&arena, &state, &[DebtIndex(0)], plan(Money::MAX));
        let entry = &outcome.step.debts[0];
        assert_eq!(entry.payment, Money::MAX);
        assert_eq!(entry.interest_portion, Money::MAX / 12 + 1);
        assert_eq!(entry.ending_balance, Money::MAX / 12 + 1);
        assert!(!entry.paid_off);
        assert_eq!(outcome.step.remaining_debt, entry.ending_balance);
    }

    #[test]
    fn round_up_handles_exact_multiples() {
        assert_eq!(round_up(10_000, 2_500), 10_000);
        assert_eq!(round_up(10_001, 2_500), 12_500);
        assert_eq!(round_up(0, 2_500), 0);
    }
}
