//! Inflation Calculator - savings projections against inflation and the risk-free rate
//!
//! This library provides:
//! - A pure calculation engine for inflation-adjusted and risk-free-grown values
//! - Form-text conversion of the four user-facing input fields
//! - Batch scenario runs over CSV input
//! - Telemetry seams for crash detection and analytics event tracking

pub mod calculation;
pub mod engine;
pub mod scenario;
pub mod telemetry;

// Re-export commonly used types
pub use calculation::{CalculationInput, CalculationResult, FormFields};
pub use engine::{EngineError, InflationEngine};
pub use scenario::ScenarioRunner;
