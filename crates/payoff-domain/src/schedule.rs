//! Timeline, milestone, and result models produced by a payoff simulation.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{common::Money, options::PayoffMethod, PayoffOptions};

/// Per-debt figures for one simulated month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DebtStepSnapshot {
    pub debt_id: Uuid,
    pub starting_balance: Money,
    pub payment: Money,
    /// Interest charged this month.
    pub interest_portion: Money,
    /// `payment - interest_portion`; negative when interest capitalises.
    pub principal_portion: Money,
    pub ending_balance: Money,
    pub paid_off: bool,
}

/// One month of the payoff timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayoffStep {
    /// 1-based month index.
    pub month: u32,
    pub label: String,
    pub date: NaiveDate,
    pub debts: Vec<DebtStepSnapshot>,
    pub total_payment: Money,
    pub total_interest: Money,
    pub total_principal: Money,
    /// Ending balance across every debt, including ones not processed this month.
    pub remaining_debt: Money,
}

impl PayoffStep {
    pub fn snapshot(&self, debt_id: Uuid) -> Option<&DebtStepSnapshot> {
        self.debts.iter().find(|entry| entry.debt_id == debt_id)
    }

    pub fn is_paid_off(&self, debt_id: Uuid) -> bool {
        self.snapshot(debt_id)
            .map(|entry| entry.paid_off)
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayoffMilestone {
    pub month: u32,
    pub debt_id: Uuid,
    pub debt_name: String,
    pub message: String,
}

/// How a simulation ended.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PayoffOutcome {
    DebtFree,
    /// The month cap was hit with debt outstanding.
    CapReached { remaining_debt: Money },
}

impl PayoffOutcome {
    pub fn is_debt_free(self) -> bool {
        matches!(self, PayoffOutcome::DebtFree)
    }
}

impl fmt::Display for PayoffOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayoffOutcome::DebtFree => f.write_str("debt free"),
            PayoffOutcome::CapReached { remaining_debt } => {
                write!(f, "not paid off ({} minor units remaining)", remaining_debt)
            }
        }
    }
}

/// Minimum-payments-only reference figures.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BaselineSummary {
    pub months: u32,
    pub total_interest: Money,
    pub outcome: PayoffOutcome,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayoffResults {
    pub months_to_debt_free: u32,
    pub total_interest_paid: Money,
    pub interest_saved: Money,
    pub months_saved: u32,
    pub outcome: PayoffOutcome,
    pub baseline: BaselineSummary,
    pub timeline: Vec<PayoffStep>,
    pub milestones: Vec<PayoffMilestone>,
}

impl PayoffResults {
    /// User-facing warning for simulations that never reach zero.
    pub fn warning(&self) -> Option<String> {
        match self.outcome {
            PayoffOutcome::DebtFree => None,
            PayoffOutcome::CapReached { .. } => Some(format!(
                "This debt cannot be paid off within {} months under the current payments; \
                 interest exceeds what is being paid.",
                self.months_to_debt_free
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayoffSimulation {
    pub method: PayoffMethod,
    pub options: PayoffOptions,
    pub start_date: NaiveDate,
    pub results: PayoffResults,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Compounding {
    Daily,
    #[default]
    Monthly,
}

/// Split of a single payment into fees, interest, and principal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PaymentAllocation {
    pub interest: Money,
    pub principal: Money,
    pub fees: Money,
}

impl PaymentAllocation {
    pub fn total(&self) -> Money {
        self.interest + self.principal + self.fees
    }
}
