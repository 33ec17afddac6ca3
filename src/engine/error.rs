//! Error taxonomy for the calculation engine

use thiserror::Error;

/// Failure modes of the pure calculation
///
/// The engine performs no I/O, so every failure is a property of the numbers
/// themselves. Errors surface synchronously and the computation is total:
/// either all four outputs are produced or one of these is returned first.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EngineError {
    /// An input was non-finite or outside its allowed range
    #[error("invalid input: {field} {reason} (got {value})")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A rate at or below -100% makes the compounding exponentiation
    /// undefined over the reals for this horizon
    #[error(
        "rate of {:.2}% over {} years has no defined compound value",
        .rate_fraction * 100.0,
        .years
    )]
    UndefinedDomain { rate_fraction: f64, years: f64 },

    /// A computed value left the representable range
    #[error("computed {field} is too large to represent")]
    Overflow { field: &'static str },
}
