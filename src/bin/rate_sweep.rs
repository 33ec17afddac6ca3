//! Sweep the risk-free rate for a fixed principal, inflation rate, and horizon
//!
//! Usage: cargo run --bin rate_sweep
//! Accepts config via environment variables:
//!   PRINCIPAL, INFLATION_RATE_PERCENT, YEARS, SWEEP_MAX_PERCENT, SWEEP_STEP_PERCENT

use std::env;

use inflation_calculator::{CalculationInput, ScenarioRunner};

fn env_f64(name: &str, default: f64) -> f64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn main() {
    env_logger::init();

    let principal = env_f64("PRINCIPAL", 1000.0);
    let inflation = env_f64("INFLATION_RATE_PERCENT", 3.0);
    let years = env_f64("YEARS", 10.0);
    let max_rate = env_f64("SWEEP_MAX_PERCENT", 10.0);
    let step = env_f64("SWEEP_STEP_PERCENT", 0.5).max(0.01);

    println!(
        "Risk-free rate sweep: ${:.2} over {} years at {}% inflation",
        principal, years, inflation
    );
    println!("{}", "=".repeat(72));
    println!(
        "{:>8} {:>14} {:>14} {:>14} {:>14}",
        "Rate%", "AfterInfl", "AtRiskFree", "RealValue", "Difference"
    );
    println!("{}", "-".repeat(72));

    let runner = ScenarioRunner::new();
    let steps = (max_rate / step).round() as u32;

    for i in 0..=steps {
        let rate = i as f64 * step;
        let input = CalculationInput::new(principal, inflation, rate, years);

        match runner.run(&input) {
            Ok(result) => {
                // Mark rates that at least keep up with holding cash
                let marker = if result.difference >= 0.0 { " <-" } else { "" };
                println!(
                    "{:>8.2} {:>14.2} {:>14.2} {:>14.2} {:>14.2}{}",
                    rate,
                    result.after_inflation,
                    result.at_risk_free,
                    result.at_risk_free_after_inflation,
                    result.difference,
                    marker,
                );
            }
            Err(err) => println!("{:>8.2} {}", rate, err),
        }
    }
}
