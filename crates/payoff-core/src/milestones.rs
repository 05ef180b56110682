use payoff_domain::{PayoffMilestone, PayoffStep};

use crate::state::DebtArena;

pub struct MilestoneDetector;

impl MilestoneDetector {
    /// Emits a milestone for every debt that becomes paid off in `current`.
    ///
    /// A debt already marked paid off in `previous` never produces a second milestone.
    pub fn detect(
        arena: &DebtArena<'_>,
        previous: Option<&PayoffStep>,
        current: &PayoffStep,
    ) -> Vec<PayoffMilestone> {
        current
            .debts
            .iter()
            .filter(|entry| entry.paid_off)
            .filter(|entry| !previous.is_some_and(|step| step.is_paid_off(entry.debt_id)))
            .filter_map(|entry| {
                let debt = arena.get(arena.index_of(entry.debt_id)?);
                Some(PayoffMilestone {
                    month: current.month,
                    debt_id: debt.id,
                    debt_name: debt.name.clone(),
                    message: format!(
                        "{} is paid off in {}! Its payment is now free for the next debt.",
                        debt.name, current.label
                    ),
                })
            })
            .collect()
    }
}
