use std::sync::RwLock;

use payoff_domain::DebtAccount;

use crate::PayoffError;

/// Source of debt records. The engine only ever reads a snapshot per call.
pub trait DebtRepository: Send + Sync {
    fn load_debts(&self) -> Result<Vec<DebtAccount>, PayoffError>;
    fn save_debts(&self, debts: &[DebtAccount]) -> Result<(), PayoffError>;
}

/// Repository kept entirely in memory, mostly useful for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemoryDebtRepository {
    debts: RwLock<Vec<DebtAccount>>,
}

impl InMemoryDebtRepository {
    pub fn new(debts: Vec<DebtAccount>) -> Self {
        Self {
            debts: RwLock::new(debts),
        }
    }
}

impl DebtRepository for InMemoryDebtRepository {
    fn load_debts(&self) -> Result<Vec<DebtAccount>, PayoffError> {
        self.debts
            .read()
            .map(|guard| guard.clone())
            .map_err(|_| PayoffError::Repository("debt store lock poisoned".into()))
    }

    fn save_debts(&self, debts: &[DebtAccount]) -> Result<(), PayoffError> {
        let mut guard = self
            .debts
            .write()
            .map_err(|_| PayoffError::Repository("debt store lock poisoned".into()))?;
        *guard = debts.to_vec();
        Ok(())
    }
}

/// Flags debts that will not amortize under minimum payments or exceed their limit.
pub fn debt_warnings(debts: &[DebtAccount]) -> Vec<String> {
    let mut warnings = Vec::new();
    for debt in debts {
        let interest = debt.monthly_interest();
        if debt.principal_balance > 0 && debt.min_payment <= interest && interest > 0 {
            warnings.push(format!(
                "debt `{}` minimum payment does not cover its monthly interest",
                debt.name
            ));
        }
        if let Some(limit) = debt.credit_limit {
            if debt.principal_balance > limit {
                warnings.push(format!("debt `{}` is over its credit limit", debt.name));
            }
        }
    }
    warnings
}
