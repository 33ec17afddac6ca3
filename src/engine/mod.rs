//! Pure calculation engine for inflation and risk-free return projections

mod compute;
mod error;

pub use compute::{discount_for_inflation, grow_at_rate, InflationEngine};
pub use error::EngineError;
