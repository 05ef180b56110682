//! Drives the month loop end-to-end and assembles the final [`PayoffSimulation`].

use chrono::NaiveDate;
use payoff_domain::{
    same_month, shift_month, DebtAccount, Money, PayoffMilestone, PayoffOptions, PayoffOutcome,
    PayoffResults, PayoffSimulation, PayoffStep,
};
use tracing::{debug, warn};

use crate::{
    baseline::BaselineCalculator,
    milestones::MilestoneDetector,
    month_step::{MonthPlan, MonthStepProcessor},
    state::{DebtArena, DebtIndex, SimulationState},
    strategy::StrategyOrderer,
    validation::{validate_debts, validate_options},
    PayoffError,
};

/// Hard upper bound on simulated months (50 years).
pub const MAX_PAYOFF_MONTHS: u32 = 600;

#[derive(Debug, Clone)]
pub(crate) struct ScheduleRun {
    pub timeline: Vec<PayoffStep>,
    pub milestones: Vec<PayoffMilestone>,
    pub months: u32,
    pub total_interest: Money,
    pub outcome: PayoffOutcome,
}

pub struct PayoffScheduler;

impl PayoffScheduler {
    /// Simulates repayment of `debts` under `options`, starting in the month of `start_date`.
    ///
    /// Input errors are reported before any month runs. Hitting the month cap is not an
    /// error: the result carries [`PayoffOutcome::CapReached`] and the partial timeline.
    pub fn compute_payoff_schedule(
        debts: &[DebtAccount],
        options: &PayoffOptions,
        start_date: NaiveDate,
    ) -> Result<PayoffSimulation, PayoffError> {
        validate_debts(debts)?;
        validate_options(options)?;
        let arena = DebtArena::new(debts);
        let order = StrategyOrderer::order_indices(&arena, options.method, &options.custom_order)?;

        debug!(
            method = %options.method,
            debts = debts.len(),
            extra = options.extra_per_month,
            "starting payoff simulation"
        );
        let run = Self::run(&arena, &order, options, start_date);
        let baseline = BaselineCalculator::run(&arena);
        debug!(
            months = run.months,
            interest = run.total_interest,
            baseline_months = baseline.months,
            "payoff simulation finished"
        );

        let results = PayoffResults {
            months_to_debt_free: run.months,
            total_interest_paid: run.total_interest,
            interest_saved: (baseline.total_interest - run.total_interest).max(0),
            months_saved: baseline.months.saturating_sub(run.months),
            outcome: run.outcome,
            baseline,
            timeline: run.timeline,
            milestones: run.milestones,
        };
        Ok(PayoffSimulation {
            method: options.method,
            options: options.clone(),
            start_date,
            results,
        })
    }

    pub(crate) fn run(
        arena: &DebtArena<'_>,
        order: &[DebtIndex],
        options: &PayoffOptions,
        start_date: NaiveDate,
    ) -> ScheduleRun {
        let mut state = SimulationState::initial(arena);
        let mut timeline: Vec<PayoffStep> = Vec::new();
        let mut milestones = Vec::new();
        let mut total_interest: Money = 0;
        let mut lump_applied = false;

        while !state.all_paid_off() && state.month < MAX_PAYOFF_MONTHS {
            let month = state.month + 1;
            let date = shift_month(start_date, month as i32 - 1);

            let mut extra_budget = options.extra_per_month;
            if let Some(lump) = options.lump_sum {
                if same_month(lump.date, date) {
                    extra_budget = extra_budget.saturating_add(lump.amount);
                    lump_applied = true;
                }
            }
            if options.keep_minimums {
                extra_budget = extra_budget.saturating_add(state.freed_minimums(arena));
            }

            let outcome = MonthStepProcessor::process(
                arena,
                &state,
                order,
                MonthPlan {
                    month,
                    date,
                    extra_budget,
                    round_up_to_nearest: options.round_up_to_nearest,
                },
            );
            milestones.extend(MilestoneDetector::detect(
                arena,
                timeline.last(),
                &outcome.step,
            ));
            total_interest = total_interest.saturating_add(outcome.step.total_interest);
            timeline.push(outcome.step);
            state = outcome.state;
        }

        if let Some(lump) = options.lump_sum {
            if !lump_applied {
                debug!(date = %lump.date, "lump sum falls outside the simulated months");
            }
        }

        let outcome = if state.all_paid_off() {
            PayoffOutcome::DebtFree
        } else {
            let remaining_debt = state.remaining_debt();
            warn!(
                months = state.month,
                remaining_debt, "payoff simulation reached the month cap with debt outstanding"
            );
            PayoffOutcome::CapReached { remaining_debt }
        };

        ScheduleRun {
            timeline,
            milestones,
            months: state.month,
            total_interest,
            outcome,
        }
    }
}
