//! JSON scenario runner for the payoff engine
//!
//! Reads a scenario file (debts, budget, lump sums), runs the requested
//! projection and prints the result as JSON. The engine itself never sees
//! a clock; when the scenario omits a start period this binary fills in
//! the current month.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::{Parser, Subcommand};
use debt_payoff_core_rs::{
    compare_strategies, project_payoff, project_single_debt, Debt, LumpSum, PeriodKey, PlanConfig,
    Strategy,
};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Parser)]
#[command(name = "debt-payoff-cli")]
#[command(about = "Debt payoff projections from JSON scenario files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Project the payoff schedule for a scenario
    Project {
        /// Path to the scenario JSON file
        scenario: PathBuf,

        /// Strategy name (snowball, avalanche, custom, minimum)
        #[arg(long, default_value = "snowball")]
        strategy: String,
    },
    /// Compare snowball and avalanche and recommend one
    Compare {
        /// Path to the scenario JSON file
        scenario: PathBuf,
    },
    /// Project a single debt from the scenario
    Single {
        /// Path to the scenario JSON file
        scenario: PathBuf,

        /// Id of the debt to project
        debt_id: String,

        /// Per-period payment (defaults to the debt's minimum payment)
        #[arg(long)]
        payment: Option<Decimal>,
    },
}

/// Scenario file layout
#[derive(Debug, Deserialize)]
struct Scenario {
    debts: Vec<Debt>,

    #[serde(default)]
    monthly_extra: Decimal,

    #[serde(default)]
    lump_sums: Vec<LumpSum>,

    /// First simulated period; defaults to the current month
    #[serde(default)]
    start_period: Option<PeriodKey>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Project { scenario, strategy } => {
            let scenario = load_scenario(&scenario)?;
            let start_period = resolve_start(&scenario);
            let result = project_payoff(PlanConfig {
                debts: scenario.debts,
                strategy: Strategy::from_name(&strategy),
                monthly_extra: scenario.monthly_extra,
                lump_sums: scenario.lump_sums,
                start_period,
            })?;
            print_json(&result)
        }
        Commands::Compare { scenario } => {
            let scenario = load_scenario(&scenario)?;
            let start_period = resolve_start(&scenario);
            let comparison = compare_strategies(
                &scenario.debts,
                scenario.monthly_extra,
                &scenario.lump_sums,
                start_period,
            )?;
            print_json(&comparison)
        }
        Commands::Single {
            scenario,
            debt_id,
            payment,
        } => {
            let scenario = load_scenario(&scenario)?;
            let start_period = resolve_start(&scenario);
            let debt = scenario
                .debts
                .iter()
                .find(|d| d.id() == debt_id)
                .with_context(|| format!("no debt with id '{debt_id}' in the scenario"))?;
            let projection = project_single_debt(debt, payment, start_period);
            print_json(&projection)
        }
    }
}

/// Read and validate a scenario file
fn load_scenario(path: &Path) -> Result<Scenario> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("could not read scenario file {}", path.display()))?;
    let scenario: Scenario = serde_json::from_str(&raw)
        .with_context(|| format!("could not parse scenario file {}", path.display()))?;

    for debt in &scenario.debts {
        debt.validate()
            .with_context(|| format!("invalid debt '{}'", debt.name()))?;
    }

    Ok(scenario)
}

/// The scenario's start period, or the current local month
fn resolve_start(scenario: &Scenario) -> PeriodKey {
    scenario.start_period.unwrap_or_else(|| {
        let today = chrono::Local::now().date_naive();
        PeriodKey::new(today.year(), today.month())
    })
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
