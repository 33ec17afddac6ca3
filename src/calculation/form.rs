//! Conversion from raw form text to a validated [`CalculationInput`]
//!
//! The calculator front end collects four free-text fields. Each field is
//! parsed individually so a malformed entry can be reported by name rather
//! than as a generic parse failure.

use thiserror::Error;

use super::CalculationInput;
use crate::engine::EngineError;

/// Error converting form text into calculator input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    /// A field's text did not parse as a number
    #[error("{field}: '{raw}' is not a number")]
    NotANumber { field: &'static str, raw: String },

    /// The parsed numbers failed the engine's input rules
    #[error(transparent)]
    Invalid(#[from] EngineError),
}

/// The four text fields of the calculator form, as entered
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields {
    pub principal: String,
    pub inflation_rate: String,
    pub risk_free_rate: String,
    pub years: String,
}

impl FormFields {
    /// Build form fields from the raw strings
    pub fn new(
        principal: impl Into<String>,
        inflation_rate: impl Into<String>,
        risk_free_rate: impl Into<String>,
        years: impl Into<String>,
    ) -> Self {
        Self {
            principal: principal.into(),
            inflation_rate: inflation_rate.into(),
            risk_free_rate: risk_free_rate.into(),
            years: years.into(),
        }
    }

    /// Parse and validate the form into engine input
    pub fn to_input(&self) -> Result<CalculationInput, FormError> {
        let input = CalculationInput::new(
            parse_field("principal", &self.principal)?,
            parse_field("inflation rate", &self.inflation_rate)?,
            parse_field("risk-free rate", &self.risk_free_rate)?,
            parse_field("years", &self.years)?,
        );
        input.validate()?;
        Ok(input)
    }
}

/// Parse one field, trimming surrounding whitespace
fn parse_field(field: &'static str, raw: &str) -> Result<f64, FormError> {
    raw.trim().parse::<f64>().map_err(|_| FormError::NotANumber {
        field,
        raw: raw.to_string(),
    })
}
