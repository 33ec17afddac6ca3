//! Calculator input and result types plus form-text conversion

mod data;
mod form;

pub use data::{CalculationInput, CalculationResult};
pub use form::{FormError, FormFields};
