//! Input and result value types for the inflation calculation

use serde::{Deserialize, Serialize};

use crate::engine::EngineError;

/// One set of calculator inputs, built once all four fields are present
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Amount being saved (today's dollars)
    pub principal: f64,

    /// Annual inflation rate in percent (3.5 means 3.5%)
    pub inflation_rate_percent: f64,

    /// Annual nominal risk-free rate in percent
    pub risk_free_rate_percent: f64,

    /// Time horizon in years (fractional years allowed)
    pub years: f64,
}

impl CalculationInput {
    /// Create a new input set
    pub fn new(
        principal: f64,
        inflation_rate_percent: f64,
        risk_free_rate_percent: f64,
        years: f64,
    ) -> Self {
        Self {
            principal,
            inflation_rate_percent,
            risk_free_rate_percent,
            years,
        }
    }

    /// Inflation rate as a decimal fraction (3.5% -> 0.035)
    pub fn inflation_rate_fraction(&self) -> f64 {
        self.inflation_rate_percent / 100.0
    }

    /// Risk-free rate as a decimal fraction
    pub fn risk_free_rate_fraction(&self) -> f64 {
        self.risk_free_rate_percent / 100.0
    }

    /// Check the up-front input rules: every field finite, principal and
    /// years non-negative
    pub fn validate(&self) -> Result<(), EngineError> {
        let fields = [
            ("principal", self.principal),
            ("inflation_rate_percent", self.inflation_rate_percent),
            ("risk_free_rate_percent", self.risk_free_rate_percent),
            ("years", self.years),
        ];

        for (field, value) in fields {
            if !value.is_finite() {
                return Err(EngineError::InvalidInput {
                    field,
                    value,
                    reason: "must be a finite number",
                });
            }
        }

        if self.principal < 0.0 {
            return Err(EngineError::InvalidInput {
                field: "principal",
                value: self.principal,
                reason: "must not be negative",
            });
        }

        if self.years < 0.0 {
            return Err(EngineError::InvalidInput {
                field: "years",
                value: self.years,
                reason: "must not be negative",
            });
        }

        Ok(())
    }
}

/// The four derived values for one calculation
///
/// All amounts are in dollars; `after_inflation` and
/// `at_risk_free_after_inflation` are in today's purchasing power.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Purchasing power of the principal after inflation, no growth
    pub after_inflation: f64,

    /// Principal grown at the risk-free rate, before inflation adjustment
    pub at_risk_free: f64,

    /// Risk-free grown value, discounted for inflation over the same horizon
    pub at_risk_free_after_inflation: f64,

    /// Net benefit of investing at the risk-free rate versus holding cash,
    /// both in today's purchasing power
    pub difference: f64,
}

impl CalculationResult {
    /// Whether investing at the risk-free rate at least keeps up with
    /// holding cash over this horizon
    pub fn investing_breaks_even(&self) -> bool {
        self.difference >= 0.0
    }
}
