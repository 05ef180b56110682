//! Plain-text rendering of payoff results. Styling is left to `output`.

use std::fmt::Write;

use payoff_domain::{
    ComparisonResult, DebtAccount, Money, PaymentAllocation, PayoffMethod, PayoffSimulation,
};

use crate::currency::{format_money, LocaleConfig};

/// Formats money for one currency and locale.
#[derive(Debug, Clone)]
pub struct MoneyFormatter {
    pub currency: String,
    pub locale: LocaleConfig,
}

impl MoneyFormatter {
    pub fn new(currency: impl Into<String>, locale: LocaleConfig) -> Self {
        Self {
            currency: currency.into(),
            locale,
        }
    }

    pub fn format(&self, amount: Money) -> String {
        format_money(amount, &self.currency, &self.locale)
    }
}

pub fn method_title(method: PayoffMethod) -> String {
    let label = method.label();
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => format!("{}{} payoff plan", first.to_ascii_uppercase(), chars.as_str()),
        None => "Payoff plan".to_string(),
    }
}

/// Headline figures for a schedule.
pub fn schedule_summary(simulation: &PayoffSimulation, money: &MoneyFormatter) -> Vec<String> {
    let results = &simulation.results;
    let mut lines = Vec::new();

    match results.timeline.last() {
        Some(last) if results.outcome.is_debt_free() => lines.push(format!(
            "Debt free in {} months ({})",
            results.months_to_debt_free, last.label
        )),
        Some(last) => lines.push(format!(
            "Still {} owed after {} months ({})",
            money.format(last.remaining_debt),
            results.months_to_debt_free,
            last.label
        )),
        None => lines.push("Nothing to pay off".to_string()),
    }

    lines.push(format!(
        "Total interest: {}",
        money.format(results.total_interest_paid)
    ));
    lines.push(format!(
        "Minimum payments only: {} months, {} interest",
        results.baseline.months,
        money.format(results.baseline.total_interest)
    ));
    lines.push(format!(
        "Interest saved: {}",
        money.format(results.interest_saved)
    ));
    lines.push(format!("Months saved: {}", results.months_saved));
    lines
}

pub fn milestone_lines(simulation: &PayoffSimulation) -> Vec<String> {
    simulation
        .results
        .milestones
        .iter()
        .map(|milestone| format!("Month {:>3}: {}", milestone.month, milestone.message))
        .collect()
}

/// Month-by-month table of totals.
pub fn timeline_table(simulation: &PayoffSimulation, money: &MoneyFormatter) -> String {
    let mut table = String::new();
    let _ = writeln!(
        table,
        "{:>5}  {:<9} {:>14} {:>14} {:>14} {:>16}",
        "Month", "Date", "Payment", "Interest", "Principal", "Remaining"
    );
    for step in &simulation.results.timeline {
        let _ = writeln!(
            table,
            "{:>5}  {:<9} {:>14} {:>14} {:>14} {:>16}",
            step.month,
            step.label,
            money.format(step.total_payment),
            money.format(step.total_interest),
            money.format(step.total_principal),
            money.format(step.remaining_debt)
        );
    }
    table
}

pub fn comparison_lines(comparison: &ComparisonResult, money: &MoneyFormatter) -> Vec<String> {
    let mut lines = Vec::new();
    for summary in [&comparison.avalanche, &comparison.snowball] {
        lines.push(format!(
            "{:<10} {:>4} months  {:>14} interest{}",
            summary.method.label(),
            summary.total_months,
            money.format(summary.total_interest),
            if summary.outcome.is_debt_free() {
                ""
            } else {
                "  (not paid off)"
            }
        ));
    }

    let savings = &comparison.savings;
    if savings.interest > 0 {
        lines.push(format!(
            "Avalanche saves {} in interest and {} months",
            money.format(savings.interest),
            savings.months
        ));
    } else if savings.interest < 0 {
        lines.push(format!(
            "Snowball saves {} in interest",
            money.format(-savings.interest)
        ));
    } else {
        lines.push("Both strategies cost the same interest".to_string());
    }
    lines.push(format!("Recommended: {}", comparison.recommendation));
    lines
}

pub fn allocation_lines(
    debt: &DebtAccount,
    payment: Money,
    allocation: &PaymentAllocation,
    money: &MoneyFormatter,
) -> Vec<String> {
    let mut lines = vec![
        format!("Payment of {} to {}", money.format(payment), debt.name),
        format!("  Interest:  {}", money.format(allocation.interest)),
        format!("  Principal: {}", money.format(allocation.principal)),
        format!("  Fees:      {}", money.format(allocation.fees)),
    ];
    let unapplied = payment - allocation.total();
    if unapplied > 0 {
        lines.push(format!(
            "  {} exceeds what is owed and would not be applied",
            money.format(unapplied)
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_capitalise_method() {
        assert_eq!(method_title(PayoffMethod::Snowball), "Snowball payoff plan");
        assert_eq!(method_title(PayoffMethod::Custom), "Custom payoff plan");
    }
}
