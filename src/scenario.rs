//! Scenario runner for batch calculations
//!
//! Loads many input sets from a CSV file, runs them through the engine in
//! parallel, and writes the paired results back out.

use std::error::Error;
use std::io::Write;
use std::path::Path;

use csv::Reader;
use rayon::prelude::*;

use crate::calculation::{CalculationInput, CalculationResult};
use crate::engine::{EngineError, InflationEngine};

/// Runner for computing many scenarios with one engine
#[derive(Debug, Clone, Copy, Default)]
pub struct ScenarioRunner {
    engine: InflationEngine,
}

impl ScenarioRunner {
    /// Create a new runner
    pub fn new() -> Self {
        Self {
            engine: InflationEngine::new(),
        }
    }

    /// Run a single scenario
    pub fn run(&self, input: &CalculationInput) -> Result<CalculationResult, EngineError> {
        self.engine.compute(input)
    }

    /// Run a batch of scenarios in parallel
    ///
    /// One bad row does not poison the batch: each scenario carries its own
    /// result, in input order.
    pub fn run_batch(
        &self,
        inputs: &[CalculationInput],
    ) -> Vec<Result<CalculationResult, EngineError>> {
        inputs
            .par_iter()
            .map(|input| self.engine.compute(input))
            .collect()
    }
}

/// Raw CSV row matching the scenario file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Principal")]
    principal: f64,
    #[serde(rename = "InflationRatePercent")]
    inflation_rate_percent: f64,
    #[serde(rename = "RiskFreeRatePercent")]
    risk_free_rate_percent: f64,
    #[serde(rename = "Years")]
    years: f64,
}

impl CsvRow {
    fn to_input(self) -> CalculationInput {
        CalculationInput::new(
            self.principal,
            self.inflation_rate_percent,
            self.risk_free_rate_percent,
            self.years,
        )
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<CalculationInput>, Box<dyn Error>> {
    let reader = Reader::from_path(path)?;
    collect_scenarios(reader)
}

/// Load scenarios from any reader (e.g., string buffer, network stream)
pub fn load_scenarios_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<CalculationInput>, Box<dyn Error>> {
    collect_scenarios(Reader::from_reader(reader))
}

fn collect_scenarios<R: std::io::Read>(
    mut reader: Reader<R>,
) -> Result<Vec<CalculationInput>, Box<dyn Error>> {
    let mut scenarios = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.to_input());
    }

    Ok(scenarios)
}

/// Write scenarios and their outcomes as CSV
///
/// Result columns are empty for failed rows; the error message lands in the
/// trailing `Error` column instead.
pub fn write_results<W: Write>(
    mut writer: W,
    scenarios: &[CalculationInput],
    outcomes: &[Result<CalculationResult, EngineError>],
) -> std::io::Result<()> {
    writeln!(
        writer,
        "Principal,InflationRatePercent,RiskFreeRatePercent,Years,\
         AfterInflation,AtRiskFree,AtRiskFreeAfterInflation,Difference,Error"
    )?;

    for (input, outcome) in scenarios.iter().zip(outcomes) {
        match outcome {
            Ok(result) => writeln!(
                writer,
                "{},{},{},{},{:.8},{:.8},{:.8},{:.8},",
                input.principal,
                input.inflation_rate_percent,
                input.risk_free_rate_percent,
                input.years,
                result.after_inflation,
                result.at_risk_free,
                result.at_risk_free_after_inflation,
                result.difference,
            )?,
            Err(err) => writeln!(
                writer,
                "{},{},{},{},,,,,{}",
                input.principal,
                input.inflation_rate_percent,
                input.risk_free_rate_percent,
                input.years,
                err,
            )?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
Principal,InflationRatePercent,RiskFreeRatePercent,Years
1000,3,5,10
500,0,0,5
100,10,2,1
";

    #[test]
    fn test_load_scenarios_from_reader() {
        let scenarios = load_scenarios_from_reader(SAMPLE_CSV.as_bytes())
            .expect("sample CSV should parse");
        assert_eq!(scenarios.len(), 3);
        assert_eq!(scenarios[0].principal, 1000.0);
        assert_eq!(scenarios[1].years, 5.0);
        assert_eq!(scenarios[2].inflation_rate_percent, 10.0);
    }

    #[test]
    fn test_load_rejects_malformed_rows() {
        let bad = "Principal,InflationRatePercent,RiskFreeRatePercent,Years\n1000,three,5,10\n";
        assert!(load_scenarios_from_reader(bad.as_bytes()).is_err());
    }

    #[test]
    fn test_run_batch_keeps_order_and_isolates_errors() {
        let runner = ScenarioRunner::new();
        let scenarios = vec![
            CalculationInput::new(1000.0, 3.0, 5.0, 10.0),
            CalculationInput::new(-1.0, 3.0, 5.0, 10.0),
            CalculationInput::new(500.0, 0.0, 0.0, 5.0),
        ];

        let outcomes = runner.run_batch(&scenarios);
        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].is_ok());
        assert!(matches!(
            outcomes[1],
            Err(EngineError::InvalidInput { field: "principal", .. })
        ));
        assert_eq!(outcomes[2].unwrap().at_risk_free, 500.0);
    }

    #[test]
    fn test_batch_matches_single_runs() {
        let runner = ScenarioRunner::new();
        let scenarios = load_scenarios_from_reader(SAMPLE_CSV.as_bytes()).unwrap();

        let batch = runner.run_batch(&scenarios);
        for (input, outcome) in scenarios.iter().zip(&batch) {
            assert_eq!(*outcome, runner.run(input));
        }
    }

    #[test]
    fn test_write_results_shape() {
        let runner = ScenarioRunner::new();
        let scenarios = vec![
            CalculationInput::new(1000.0, 3.0, 5.0, 10.0),
            CalculationInput::new(-1.0, 3.0, 5.0, 10.0),
        ];
        let outcomes = runner.run_batch(&scenarios);

        let mut buf = Vec::new();
        write_results(&mut buf, &scenarios, &outcomes).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Principal,"));
        assert!(lines[1].contains("744.09"));
        assert!(lines[2].contains("must not be negative"));
    }
}
