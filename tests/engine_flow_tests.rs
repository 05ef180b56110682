mod common;

use chrono::NaiveDate;
use common::{Workspace, THREE_DEBTS};
use debt_payoff::{
    cli::report::{self, MoneyFormatter},
    currency::LocaleConfig,
    engine::{
        api_allocate_from_repository, api_compare_from_repository, api_schedule_from_repository,
        DebtRepository,
    },
    domain::{Compounding, PayoffMethod, PayoffOptions},
    init,
    storage::JsonDebtRepository,
};

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

#[test]
fn json_debts_flow_through_the_engine() {
    init();
    let ws = Workspace::new(THREE_DEBTS);
    let repository = JsonDebtRepository::new(ws.debts_path());

    let simulation = api_schedule_from_repository(
        &repository,
        &PayoffOptions::new(PayoffMethod::Avalanche, 20_000),
        start(),
    )
    .expect("schedule");
    assert_eq!(simulation.results.months_to_debt_free, 38);
    assert_eq!(simulation.results.milestones[0].debt_name, "Store card");

    let money = MoneyFormatter::new("USD", LocaleConfig::default());
    let summary = report::schedule_summary(&simulation, &money);
    assert_eq!(summary[0], "Debt free in 38 months (Feb 2028)");
    assert_eq!(summary[1], "Total interest: $3,117.27");
    assert_eq!(summary[2], "Minimum payments only: 94 months, $8,153.59 interest");
    assert_eq!(summary[3], "Interest saved: $5,036.32");
    assert_eq!(summary[4], "Months saved: 56");

    let table = report::timeline_table(&simulation, &money);
    assert_eq!(table.lines().count(), 39);
    assert!(table.lines().nth(1).unwrap_or_default().contains("Jan 2025"));
}

#[test]
fn saved_ids_are_stable_for_allocation() {
    let ws = Workspace::new(THREE_DEBTS);
    let repository = JsonDebtRepository::new(ws.debts_path());

    // Persisting assigns ids so later lookups by id are stable.
    let debts = repository.load_debts().expect("load");
    repository.save_debts(&debts).expect("save");
    let visa = debts[0].id;

    let allocation =
        api_allocate_from_repository(&repository, visa, 10_000, Compounding::Monthly)
            .expect("allocate");
    assert_eq!(allocation.interest, 7_500);
    assert_eq!(allocation.principal, 2_500);
    assert_eq!(allocation.fees, 0);

    let money = MoneyFormatter::new("USD", LocaleConfig::default());
    let lines = report::allocation_lines(&debts[0], 10_000, &allocation, &money);
    assert_eq!(lines[0], "Payment of $100.00 to Visa");
}

#[test]
fn comparison_report_names_the_winner() {
    let ws = Workspace::new(
        r#"[
            {"name": "Card", "balance": 6000, "apr": 25, "min_payment": 150},
            {"name": "Student loan", "balance": 2000, "apr": 5, "min_payment": 50}
        ]"#,
    );
    let repository = JsonDebtRepository::new(ws.debts_path());
    let comparison =
        api_compare_from_repository(&repository, 20_000, start()).expect("compare");
    assert_eq!(comparison.recommendation, PayoffMethod::Avalanche);

    let money = MoneyFormatter::new("USD", LocaleConfig::default());
    let lines = report::comparison_lines(&comparison, &money);
    assert!(lines[0].starts_with("avalanche"));
    assert!(lines[0].contains("25 months"));
    assert!(lines[1].contains("27 months"));
    assert_eq!(lines.last().map(String::as_str), Some("Recommended: avalanche"));
}
