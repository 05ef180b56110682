use std::{env, path::PathBuf};

use payoff_config::{Config, ConfigManager};
use payoff_core::{
    calculate_payment_allocation, compute_payoff_schedule, debt_warnings, Clock,
    ComparisonReporter, DebtRepository, SystemClock,
};
use payoff_domain::{DebtAccount, PayoffMethod};
use payoff_storage_json::JsonDebtRepository;
use tracing::debug;
use uuid::Uuid;

use crate::{
    cli::{
        args::{AllocateArgs, CompareArgs, ScheduleArgs},
        output::{self, OutputPreferences},
        report::{self, MoneyFormatter},
    },
    currency::{parse_amount, LocaleConfig},
    errors::CliError,
    utils::build_info,
};

/// Environment variable pointing at an alternative config file.
pub const CONFIG_ENV: &str = "DEBT_PAYOFF_CONFIG";

/// Shared state resolved once per invocation.
#[derive(Debug, Clone)]
pub struct CliContext {
    pub config: Config,
    pub locale: LocaleConfig,
    clock: SystemClock,
}

impl CliContext {
    pub fn new(config: Config) -> Self {
        let locale = LocaleConfig::for_tag(&config.locale);
        Self {
            config,
            locale,
            clock: SystemClock,
        }
    }

    /// Loads the config from `DEBT_PAYOFF_CONFIG` or the platform location.
    pub fn load() -> Result<Self, CliError> {
        let manager = match env::var_os(CONFIG_ENV) {
            Some(path) => ConfigManager::new(PathBuf::from(path)),
            None => ConfigManager::default_location(),
        };
        let config = manager.load()?;
        debug!(path = %manager.config_path().display(), "configuration loaded");
        output::set_preferences(OutputPreferences {
            color_enabled: config.ui_color_enabled,
        });
        Ok(Self::new(config))
    }

    fn repository(&self, path: Option<&PathBuf>) -> JsonDebtRepository {
        let path = path
            .cloned()
            .unwrap_or_else(|| self.config.resolve_default_debts_path());
        JsonDebtRepository::new(path)
    }

    fn formatter(&self, debts: &[DebtAccount]) -> MoneyFormatter {
        let currency = debts
            .first()
            .map(|debt| debt.currency.clone())
            .unwrap_or_else(|| self.config.currency.clone());
        MoneyFormatter::new(currency, self.locale.clone())
    }
}

pub fn run_schedule(ctx: &CliContext, args: &ScheduleArgs) -> Result<(), CliError> {
    let repository = ctx.repository(args.debts_path.as_ref());
    let debts = repository.load_debts()?;
    let money = ctx.formatter(&debts);
    let currency = money.currency.as_str();

    let mut options = ctx.config.payoff_options();
    if let Some(method) = args.method {
        options.method = method.into();
    } else if !args.order.is_empty() {
        options.method = PayoffMethod::Custom;
    }
    if let Some(extra) = &args.extra {
        options.extra_per_month =
            parse_amount(extra, currency).map_err(|reason| CliError::invalid("--extra", reason))?;
    }
    if let Some(round) = &args.round {
        options.round_up_to_nearest =
            Some(parse_amount(round, currency).map_err(|reason| CliError::invalid("--round", reason))?);
    }
    if let Some(lump) = &args.lump {
        let amount = parse_amount(&lump.amount, currency)
            .map_err(|reason| CliError::invalid("--lump", reason))?;
        options = options.with_lump_sum(amount, lump.date);
    }
    if args.no_rollover {
        options.keep_minimums = false;
    }
    options.custom_order = resolve_order(&debts, &args.order)?;

    let start = args.start.unwrap_or_else(|| ctx.clock.today());
    let simulation = compute_payoff_schedule(&debts, &options, start)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&simulation)?);
        return Ok(());
    }

    for warning in debt_warnings(&debts) {
        output::warning(warning);
    }
    output::section(report::method_title(simulation.method));
    for line in report::schedule_summary(&simulation, &money) {
        output::info(line);
    }
    if let Some(warning) = simulation.results.warning() {
        output::warning(warning);
    }
    let milestones = report::milestone_lines(&simulation);
    if !milestones.is_empty() {
        output::section("Milestones");
        for line in milestones {
            output::success(line);
        }
    }
    if !simulation.results.timeline.is_empty() {
        output::section("Timeline");
        print!("{}", report::timeline_table(&simulation, &money));
    }
    Ok(())
}

pub fn run_compare(ctx: &CliContext, args: &CompareArgs) -> Result<(), CliError> {
    let repository = ctx.repository(args.debts_path.as_ref());
    let debts = repository.load_debts()?;
    let money = ctx.formatter(&debts);

    let extra = match &args.extra {
        Some(extra) => parse_amount(extra, &money.currency)
            .map_err(|reason| CliError::invalid("--extra", reason))?,
        None => ctx.config.default_extra_per_month,
    };
    let start = args.start.unwrap_or_else(|| ctx.clock.today());
    let comparison = ComparisonReporter::compare_strategies_from(&debts, extra, start)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
        return Ok(());
    }

    output::section("Avalanche vs. snowball");
    for line in report::comparison_lines(&comparison, &money) {
        output::info(line);
    }
    Ok(())
}

pub fn run_allocate(ctx: &CliContext, args: &AllocateArgs) -> Result<(), CliError> {
    let debts = JsonDebtRepository::new(args.debts_path.clone()).load_debts()?;
    let debt = find_debt(&debts, &args.debt)
        .ok_or_else(|| CliError::invalid(&args.debt, "no debt with that id or name"))?;
    let money = ctx.formatter(std::slice::from_ref(debt));

    let payment = parse_amount(&args.amount, &debt.currency)
        .map_err(|reason| CliError::invalid("amount", reason))?;
    let allocation = calculate_payment_allocation(debt, payment, args.compounding())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&allocation)?);
        return Ok(());
    }

    output::section("Payment allocation");
    for line in report::allocation_lines(debt, payment, &allocation, &money) {
        output::info(line);
    }
    Ok(())
}

pub fn run_version() {
    let meta = build_info::current();
    println!("{}", meta.summary());
    println!("rustc: {}", meta.rustc);
}

/// Matches a debt by id first, then by case-insensitive name.
pub fn find_debt<'a>(debts: &'a [DebtAccount], key: &str) -> Option<&'a DebtAccount> {
    let key = key.trim();
    if let Ok(id) = Uuid::parse_str(key) {
        if let Some(debt) = debts.iter().find(|debt| debt.id == id) {
            return Some(debt);
        }
    }
    debts
        .iter()
        .find(|debt| debt.name.eq_ignore_ascii_case(key))
}

/// Turns `--order` keys into ids. Well-formed but unknown ids pass through so
/// the engine can apply its own unknown-id handling.
pub fn resolve_order(debts: &[DebtAccount], keys: &[String]) -> Result<Vec<Uuid>, CliError> {
    keys.iter()
        .map(|key| match find_debt(debts, key) {
            Some(debt) => Ok(debt.id),
            None => Uuid::parse_str(key.trim())
                .map_err(|_| CliError::invalid("--order", format!("no debt named `{}`", key))),
        })
        .collect()
}
