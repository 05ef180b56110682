//! Per-run simulation state.
//!
//! Debts live in an indexed arena built once per run; each month produces a
//! fresh [`SimulationState`] instead of mutating the previous one, so any
//! intermediate state can be replayed or inspected.

use std::collections::HashMap;

use payoff_domain::{saturating_sum, DebtAccount, Money};
use uuid::Uuid;

/// Position of a debt inside a [`DebtArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DebtIndex(pub usize);

/// Read-only view over the caller's debt records, addressable by index or id.
#[derive(Debug)]
pub struct DebtArena<'a> {
    accounts: &'a [DebtAccount],
    by_id: HashMap<Uuid, DebtIndex>,
}

impl<'a> DebtArena<'a> {
    pub fn new(accounts: &'a [DebtAccount]) -> Self {
        let by_id = accounts
            .iter()
            .enumerate()
            .map(|(idx, debt)| (debt.id, DebtIndex(idx)))
            .collect();
        Self { accounts, by_id }
    }

    pub fn get(&self, index: DebtIndex) -> &'a DebtAccount {
        &self.accounts[index.0]
    }

    pub fn index_of(&self, id: Uuid) -> Option<DebtIndex> {
        self.by_id.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn indices(&self) -> impl Iterator<Item = DebtIndex> {
        (0..self.accounts.len()).map(DebtIndex)
    }

    pub fn accounts(&self) -> &'a [DebtAccount] {
        self.accounts
    }
}

/// Mutable-per-run view of one debt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebtState {
    pub debt_id: Uuid,
    pub current_balance: Money,
    pub paid_off: bool,
    /// Month in which the simulation extinguished the debt; `None` for debts that started at zero.
    pub paid_off_in: Option<u32>,
}

impl DebtState {
    pub fn from_account(account: &DebtAccount) -> Self {
        Self {
            debt_id: account.id,
            current_balance: account.principal_balance,
            paid_off: account.principal_balance <= 0,
            paid_off_in: None,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.paid_off
    }
}

/// Balances of every debt at the end of `month` (0 = before the first month).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationState {
    pub month: u32,
    debts: Vec<DebtState>,
}

impl SimulationState {
    pub fn initial(arena: &DebtArena<'_>) -> Self {
        Self {
            month: 0,
            debts: arena.accounts().iter().map(DebtState::from_account).collect(),
        }
    }

    pub(crate) fn next(month: u32, debts: Vec<DebtState>) -> Self {
        Self { month, debts }
    }

    pub fn debt(&self, index: DebtIndex) -> &DebtState {
        &self.debts[index.0]
    }

    pub fn debts(&self) -> &[DebtState] {
        &self.debts
    }

    pub fn all_paid_off(&self) -> bool {
        self.debts.iter().all(|debt| debt.paid_off)
    }

    pub fn remaining_debt(&self) -> Money {
        saturating_sum(self.debts.iter().map(|debt| debt.current_balance))
    }

    /// Sum of minimum payments no longer owed because the simulation paid those debts off.
    pub fn freed_minimums(&self, arena: &DebtArena<'_>) -> Money {
        saturating_sum(
            self.debts
                .iter()
                .enumerate()
                .filter(|(_, debt)| debt.paid_off_in.is_some())
                .map(|(idx, _)| arena.get(DebtIndex(idx)).min_payment),
        )
    }
}
