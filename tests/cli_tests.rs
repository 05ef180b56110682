mod common;

use chrono::NaiveDate;
use common::{Workspace, THREE_DEBTS};
use debt_payoff::{
    domain::ComparisonResult,
    engine::{ComparisonReporter, DebtRepository},
    storage::JsonDebtRepository,
};
use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn schedule_prints_plan_and_milestones() {
    let ws = Workspace::new(THREE_DEBTS);
    ws.command()
        .arg("schedule")
        .arg(ws.debts_path())
        .args(["--extra", "200", "--start", "2025-01-15"])
        .assert()
        .success()
        .stdout(contains("Avalanche payoff plan"))
        .stdout(contains("Debt free in 38 months (Feb 2028)"))
        .stdout(contains("Total interest: $3,117.27"))
        .stdout(contains("Store card is paid off in Sep 2025"))
        .stdout(contains("Jan 2025"));
}

#[test]
fn schedule_json_is_machine_readable() {
    let ws = Workspace::new(THREE_DEBTS);
    let output = ws
        .command()
        .arg("schedule")
        .arg(ws.debts_path())
        .args(["--extra", "200", "--start", "2025-01-15", "--json"])
        .output()
        .expect("run cli");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json stdout");
    assert_eq!(value["method"], "avalanche");
    assert_eq!(value["results"]["months_to_debt_free"], 38);
    assert_eq!(value["results"]["total_interest_paid"], 311_727);
    assert_eq!(value["results"]["outcome"]["status"], "debt_free");
}

#[test]
fn schedule_accepts_custom_order_by_name() {
    let ws = Workspace::new(THREE_DEBTS);
    let output = ws
        .command()
        .arg("schedule")
        .arg(ws.debts_path())
        .args(["--order", "Car loan", "--extra", "200", "--json"])
        .args(["--start", "2025-01-15"])
        .output()
        .expect("run cli");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json stdout");
    assert_eq!(value["method"], "custom");
    assert_eq!(value["results"]["milestones"][0]["debt_name"], "Car loan");
}

#[test]
fn capped_schedule_warns() {
    let ws = Workspace::new(
        r#"[{"name": "Payday", "balance": 1000, "apr": 24, "min_payment": 10}]"#,
    );
    ws.command()
        .arg("schedule")
        .arg(ws.debts_path())
        .args(["--start", "2025-01-01"])
        .assert()
        .success()
        .stdout(contains("cannot be paid off within 600 months"))
        .stdout(contains("does not cover its monthly interest"));
}

#[test]
fn compare_recommends_avalanche_for_wide_gap() {
    let ws = Workspace::new(
        r#"[
            {"name": "Card", "balance": 6000, "apr": 25, "min_payment": 150},
            {"name": "Student loan", "balance": 2000, "apr": 5, "min_payment": 50}
        ]"#,
    );
    ws.command()
        .arg("compare")
        .arg(ws.debts_path())
        .args(["--extra", "200", "--start", "2025-01-15"])
        .assert()
        .success()
        .stdout(contains("Recommended: avalanche"))
        .stdout(contains("Avalanche saves"));
}

#[test]
fn compare_json_matches_engine_on_loaded_debts() {
    let ws = Workspace::new(THREE_DEBTS);
    let output = ws
        .command()
        .arg("compare")
        .arg(ws.debts_path())
        .args(["--extra", "200", "--start", "2025-01-15", "--json"])
        .output()
        .expect("run cli");
    assert!(output.status.success());

    let printed: ComparisonResult = serde_json::from_slice(&output.stdout).expect("json stdout");
    let debts = JsonDebtRepository::new(ws.debts_path())
        .load_debts()
        .expect("load debts");
    let start = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    let expected =
        ComparisonReporter::compare_strategies_from(&debts, 20_000, start).expect("compare");
    assert_eq!(printed, expected);
}

#[test]
fn allocate_splits_interest_and_principal() {
    let ws = Workspace::new(THREE_DEBTS);
    ws.command()
        .arg("allocate")
        .arg(ws.debts_path())
        .args(["visa", "100"])
        .assert()
        .success()
        .stdout(contains("Interest:  $75.00"))
        .stdout(contains("Principal: $25.00"))
        .stdout(contains("Fees:      $0.00"));
}

#[test]
fn version_reports_package_version() {
    assert_cmd::Command::cargo_bin("debt_payoff_cli")
        .expect("binary")
        .arg("version")
        .assert()
        .success()
        .stdout(contains(format!("debt_payoff {}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn invalid_input_fails_with_message() {
    let ws = Workspace::new(THREE_DEBTS);
    ws.command()
        .arg("schedule")
        .arg(ws.debts_path())
        .args(["--extra", "-5"])
        .assert()
        .code(1)
        .stderr(contains("Validation failed"));

    ws.command()
        .arg("schedule")
        .arg(ws.dir.path().join("missing.json"))
        .assert()
        .code(1)
        .stderr(contains("Debt repository error"));

    ws.command()
        .arg("frobnicate")
        .assert()
        .code(2)
        .stderr(contains("Usage: debt_payoff_cli").and(contains("frobnicate")));

    ws.command()
        .arg("schedule")
        .args(["--method", "random"])
        .assert()
        .code(2)
        .stderr(contains("invalid value 'random'"));

    ws.command()
        .arg("allocate")
        .arg(ws.debts_path())
        .args(["Boat", "100"])
        .assert()
        .code(2)
        .stderr(contains("no debt with that id or name"));
}
