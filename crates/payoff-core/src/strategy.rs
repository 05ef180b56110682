//! Orders debts so the scheduler knows which one receives the extra payment.

use std::cmp::Reverse;

use payoff_domain::{DebtAccount, PayoffMethod};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
    state::{DebtArena, DebtIndex},
    PayoffError,
};

pub struct StrategyOrderer;

impl StrategyOrderer {
    /// Returns the debts in priority order for `method`.
    ///
    /// Avalanche sorts by descending APR and snowball by ascending balance; both
    /// keep the input order for ties. Custom follows `custom_order` and appends
    /// any debt it does not mention in input order.
    pub fn order(
        debts: &[DebtAccount],
        method: PayoffMethod,
        custom_order: &[Uuid],
    ) -> Result<Vec<DebtAccount>, PayoffError> {
        let arena = DebtArena::new(debts);
        let indices = Self::order_indices(&arena, method, custom_order)?;
        Ok(indices
            .into_iter()
            .map(|index| arena.get(index).clone())
            .collect())
    }

    pub fn order_indices(
        arena: &DebtArena<'_>,
        method: PayoffMethod,
        custom_order: &[Uuid],
    ) -> Result<Vec<DebtIndex>, PayoffError> {
        let mut indices: Vec<DebtIndex> = arena.indices().collect();
        match method {
            PayoffMethod::Avalanche => {
                indices.sort_by_key(|index| Reverse(arena.get(*index).apr));
            }
            PayoffMethod::Snowball => {
                indices.sort_by_key(|index| arena.get(*index).principal_balance);
            }
            PayoffMethod::Custom => return Self::custom_indices(arena, custom_order),
        }
        if !custom_order.is_empty() {
            debug!(%method, "ignoring custom order for non-custom payoff method");
        }
        Ok(indices)
    }

    fn custom_indices(
        arena: &DebtArena<'_>,
        custom_order: &[Uuid],
    ) -> Result<Vec<DebtIndex>, PayoffError> {
        if custom_order.is_empty() {
            return Err(PayoffError::InvalidOptions(
                "custom payoff method requires a custom order".into(),
            ));
        }

        let mut placed = vec![false; arena.len()];
        let mut ordered = Vec::with_capacity(arena.len());
        let mut unknown = 0usize;
        for id in custom_order {
            match arena.index_of(*id) {
                Some(index) if !placed[index.0] => {
                    placed[index.0] = true;
                    ordered.push(index);
                }
                Some(_) => {}
                None => unknown += 1,
            }
        }

        if ordered.is_empty() {
            return Err(PayoffError::InvalidOptions(
                "custom order does not reference any known debt".into(),
            ));
        }
        if unknown > 0 {
            warn!(unknown, "custom order references unknown debt ids");
        }

        let before = ordered.len();
        ordered.extend(arena.indices().filter(|index| !placed[index.0]));
        if ordered.len() > before {
            debug!(
                appended = ordered.len() - before,
                "appending debts missing from custom order"
            );
        }
        Ok(ordered)
    }
}
