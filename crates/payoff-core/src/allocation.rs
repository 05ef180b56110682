//! Single-payment preview used by payment-entry screens. Never mutates state.

use payoff_domain::{Compounding, DebtAccount, Money, PaymentAllocation};

use crate::{validation::validate_debts, PayoffError};

/// Days in the statement month assumed for daily compounding.
pub const DAILY_COMPOUNDING_DAYS: i32 = 30;
const DAYS_PER_YEAR: f64 = 365.0;

pub struct AllocationService;

impl AllocationService {
    /// Splits `payment` for `debt` into fees, interest, and principal.
    ///
    /// Interest is covered first, principal is capped at the outstanding balance,
    /// and fees are always zero because debts carry no fee schedule.
    pub fn calculate_payment_allocation(
        debt: &DebtAccount,
        payment: Money,
        compounding: Compounding,
    ) -> Result<PaymentAllocation, PayoffError> {
        validate_debts(std::slice::from_ref(debt))?;
        if payment < 0 {
            return Err(PayoffError::Validation(
                "payment amount cannot be negative".into(),
            ));
        }

        let interest_due = Self::interest_due(debt, compounding);
        let interest = payment.min(interest_due);
        let principal = (payment - interest).min(debt.principal_balance);
        Ok(PaymentAllocation {
            interest,
            principal,
            fees: 0,
        })
    }

    /// Interest accrued on the current balance over one statement month.
    pub fn interest_due(debt: &DebtAccount, compounding: Compounding) -> Money {
        match compounding {
            Compounding::Monthly => debt.monthly_interest(),
            Compounding::Daily => {
                if debt.principal_balance <= 0 || debt.apr.bps() <= 0 {
                    return 0;
                }
                let daily_rate = debt.apr.fraction() / DAYS_PER_YEAR;
                let growth = (1.0 + daily_rate).powi(DAILY_COMPOUNDING_DAYS) - 1.0;
                (debt.principal_balance as f64 * growth).round() as Money
            }
        }
    }
}
