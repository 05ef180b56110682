//! Command-line surface of `debt_payoff_cli`.
//!
//! Amounts stay as typed text here; they are converted to minor units once the
//! debts file (and so the currency) is known.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use payoff_domain::{Compounding, PayoffMethod};

#[derive(Parser, Debug)]
#[command(
    name = "debt_payoff_cli",
    version,
    about = "Debt payoff planner (avalanche, snowball, or custom order)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Month-by-month payoff schedule
    Schedule(ScheduleArgs),
    /// Avalanche vs. snowball with the same extra budget
    Compare(CompareArgs),
    /// Split one payment into interest, principal and fees
    Allocate(AllocateArgs),
    /// Build metadata
    Version,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum CliPayoffMethod {
    Avalanche,
    Snowball,
    Custom,
}

impl From<CliPayoffMethod> for PayoffMethod {
    fn from(value: CliPayoffMethod) -> Self {
        match value {
            CliPayoffMethod::Avalanche => PayoffMethod::Avalanche,
            CliPayoffMethod::Snowball => PayoffMethod::Snowball,
            CliPayoffMethod::Custom => PayoffMethod::Custom,
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ScheduleArgs {
    /// Debts file; defaults to the configured location
    pub debts_path: Option<PathBuf>,
    #[arg(long, value_enum)]
    pub method: Option<CliPayoffMethod>,
    #[arg(long, allow_negative_numbers = true, help = "Extra payment per month, e.g. 200")]
    pub extra: Option<String>,
    #[arg(
        long,
        value_delimiter = ',',
        help = "Debt ids or names in payoff order; implies --method custom"
    )]
    pub order: Vec<String>,
    #[arg(long, help = "Round each payment up to a multiple of this amount")]
    pub round: Option<String>,
    #[arg(long, value_parser = parse_lump, help = "One-off payment as <amount>@YYYY-MM")]
    pub lump: Option<LumpArg>,
    #[arg(long, help = "Do not roll paid-off minimums into the extra budget")]
    pub no_rollover: bool,
    #[arg(long, value_parser = parse_date, help = "First simulated month, YYYY-MM-DD")]
    pub start: Option<NaiveDate>,
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LumpArg {
    pub amount: String,
    pub date: NaiveDate,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct CompareArgs {
    pub debts_path: Option<PathBuf>,
    #[arg(long, allow_negative_numbers = true)]
    pub extra: Option<String>,
    #[arg(long, value_parser = parse_date)]
    pub start: Option<NaiveDate>,
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct AllocateArgs {
    pub debts_path: PathBuf,
    /// Debt id or name
    pub debt: String,
    #[arg(allow_negative_numbers = true)]
    pub amount: String,
    #[arg(long, help = "Use daily compounding over a 30-day statement month")]
    pub daily: bool,
    #[arg(long)]
    pub json: bool,
}

impl AllocateArgs {
    pub fn compounding(&self) -> Compounding {
        if self.daily {
            Compounding::Daily
        } else {
            Compounding::Monthly
        }
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("`{}` is not a YYYY-MM-DD date", value))
}

/// `<amount>@YYYY-MM`, pinned to the first of that month.
fn parse_lump(value: &str) -> Result<LumpArg, String> {
    let (amount, month) = value
        .split_once('@')
        .ok_or_else(|| "expected <amount>@YYYY-MM".to_string())?;
    let date = NaiveDate::parse_from_str(&format!("{}-01", month.trim()), "%Y-%m-%d")
        .map_err(|_| format!("`{}` is not a YYYY-MM month", month))?;
    Ok(LumpArg {
        amount: amount.trim().to_string(),
        date,
    })
}

#[cfg(test)]
mod tests {
    use clap::{error::ErrorKind, CommandFactory};

    use super::*;

    fn parse(args: &[&str]) -> Result<Command, clap::Error> {
        Cli::try_parse_from(std::iter::once("debt_payoff_cli").chain(args.iter().copied()))
            .map(|cli| cli.command)
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_schedule_flags() {
        let command = parse(&[
            "schedule",
            "debts.json",
            "--method",
            "snowball",
            "--extra",
            "200",
            "--lump",
            "1500@2025-03",
            "--start",
            "2025-01-15",
            "--json",
        ])
        .expect("parse");

        let Command::Schedule(args) = command else {
            panic!("expected schedule");
        };
        assert_eq!(args.debts_path, Some(PathBuf::from("debts.json")));
        assert_eq!(args.method.map(PayoffMethod::from), Some(PayoffMethod::Snowball));
        assert_eq!(args.extra.as_deref(), Some("200"));
        assert_eq!(
            args.lump,
            Some(LumpArg {
                amount: "1500".into(),
                date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            })
        );
        assert_eq!(args.start, NaiveDate::from_ymd_opt(2025, 1, 15));
        assert!(args.json);
    }

    #[test]
    fn order_splits_on_commas_and_extra_accepts_negatives() {
        let Command::Schedule(args) =
            parse(&["schedule", "--order", "Car,Visa,Store", "--extra", "-5"]).expect("parse")
        else {
            panic!("expected schedule");
        };
        assert_eq!(args.order, vec!["Car", "Visa", "Store"]);
        assert_eq!(args.extra.as_deref(), Some("-5"));
        assert_eq!(args.debts_path, None);
    }

    #[test]
    fn allocate_takes_path_debt_and_amount() {
        let Command::Allocate(args) =
            parse(&["allocate", "debts.json", "Visa", "100", "--daily"]).expect("parse")
        else {
            panic!("expected allocate");
        };
        assert_eq!(args.debts_path, PathBuf::from("debts.json"));
        assert_eq!(args.debt, "Visa");
        assert_eq!(args.amount, "100");
        assert_eq!(args.compounding(), Compounding::Daily);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            parse(&[]).unwrap_err().kind(),
            ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        );
        assert_eq!(
            parse(&["frobnicate"]).unwrap_err().kind(),
            ErrorKind::InvalidSubcommand
        );
        assert_eq!(
            parse(&["schedule", "--method", "random"]).unwrap_err().kind(),
            ErrorKind::InvalidValue
        );
        assert_eq!(
            parse(&["schedule", "--lump", "500"]).unwrap_err().kind(),
            ErrorKind::ValueValidation
        );
        assert_eq!(
            parse(&["allocate", "debts.json", "Visa"]).unwrap_err().kind(),
            ErrorKind::MissingRequiredArgument
        );
    }
}
