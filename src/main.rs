//! Inflation Calculator CLI
//!
//! Command-line front end for the savings calculator: one-off calculations
//! from the four form fields, and batch runs over scenario CSV files.

use std::collections::HashMap;
use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use inflation_calculator::{
    calculation::FormFields,
    scenario::{load_scenarios, write_results, ScenarioRunner},
    telemetry::{CrashReporter, EventTracker, LogEventTracker, SessionSentinel},
};

#[derive(Parser)]
#[command(name = "inflation_calculator", version, about = "Savings calculator for inflation and risk-free return projections")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute one calculation from the four form fields
    Compute {
        /// Amount being saved
        principal: String,
        /// Annual inflation rate in percent
        inflation_rate: String,
        /// Annual risk-free rate in percent
        risk_free_rate: String,
        /// Time horizon in years
        years: String,

        /// Print the result as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Run a batch of scenarios from a CSV file
    Batch {
        /// Scenario CSV with columns Principal,InflationRatePercent,RiskFreeRatePercent,Years
        #[arg(long)]
        input: PathBuf,

        /// Where to write the results CSV
        #[arg(long, default_value = "results.csv")]
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Surface a crash of the previous run before doing anything else
    let sentinel = match SessionSentinel::begin_default() {
        Ok(sentinel) => Some(sentinel),
        Err(err) => {
            log::warn!("session tracking unavailable: {}", err);
            None
        }
    };
    if let Some(sentinel) = &sentinel {
        check_previous_session(sentinel);
    }

    let tracker = LogEventTracker::new();
    let outcome = match cli.command {
        Command::Compute {
            principal,
            inflation_rate,
            risk_free_rate,
            years,
            json,
        } => compute(
            FormFields::new(principal, inflation_rate, risk_free_rate, years),
            json,
            &tracker,
        ),
        Command::Batch { input, output } => batch(&input, &output),
    };

    if let Some(sentinel) = &sentinel {
        sentinel.finish();
    }

    outcome
}

fn check_previous_session(reporter: &dyn CrashReporter) {
    if reporter.has_crashed_last_session() {
        println!("Sorry about the crash!");
        if let Some(report) = reporter.last_session_report() {
            log::info!(
                "previous session (v{}) started {} and did not end cleanly",
                report.app_version,
                report.started_at
            );
        }
    }
}

fn compute(form: FormFields, json: bool, tracker: &dyn EventTracker) -> anyhow::Result<()> {
    let input = form.to_input()?;
    let result = ScenarioRunner::new().run(&input)?;

    let mut properties = HashMap::new();
    properties.insert("principal".to_string(), input.principal.to_string());
    properties.insert(
        "inflation_rate_percent".to_string(),
        input.inflation_rate_percent.to_string(),
    );
    properties.insert(
        "risk_free_rate_percent".to_string(),
        input.risk_free_rate_percent.to_string(),
    );
    properties.insert("years".to_string(), input.years.to_string());
    tracker.track("calculate_inflation", &properties);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!(
        "${:.2} over {} years at {}% inflation, {}% risk-free",
        input.principal, input.years, input.inflation_rate_percent, input.risk_free_rate_percent
    );
    println!("{}", "-".repeat(60));
    println!("  Purchasing power if held as cash:   ${:>14.2}", result.after_inflation);
    println!("  Grown at the risk-free rate:        ${:>14.2}", result.at_risk_free);
    println!("  ... in today's purchasing power:    ${:>14.2}", result.at_risk_free_after_inflation);
    println!("  Net benefit of investing:           ${:>14.2}", result.difference);

    if !result.investing_breaks_even() {
        println!("\nInflation outpaces the risk-free rate over this horizon.");
    }

    Ok(())
}

fn batch(input: &PathBuf, output: &PathBuf) -> anyhow::Result<()> {
    let scenarios = load_scenarios(input)
        .map_err(|err| anyhow::anyhow!("{}", err))
        .with_context(|| format!("failed to load scenarios from {}", input.display()))?;
    println!("Loaded {} scenarios from {}", scenarios.len(), input.display());

    let runner = ScenarioRunner::new();
    let outcomes = runner.run_batch(&scenarios);
    let failures = outcomes.iter().filter(|o| o.is_err()).count();

    let file = File::create(output)
        .with_context(|| format!("failed to create {}", output.display()))?;
    write_results(file, &scenarios, &outcomes)?;

    println!(
        "Wrote {} results to {} ({} failed)",
        outcomes.len(),
        output.display(),
        failures
    );

    Ok(())
}
