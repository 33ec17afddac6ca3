//! Core engine for inflation and risk-free return calculations
//!
//! All functions here are pure: no state, no I/O, no allocation beyond the
//! result value. Any number of threads may call into the engine concurrently.

use crate::calculation::{CalculationInput, CalculationResult};
use super::error::EngineError;

/// Discount a nominal amount for inflation over a horizon
///
/// Computes `value / (1 + inflation_rate_fraction)^years`, standard
/// compound discounting. For `inflation_rate_fraction > -1` the result is
/// finite and keeps the sign of `value`.
///
/// Rates at or below -100% are rejected where the exponentiation stops
/// being defined over the reals: a negative base with a fractional
/// exponent, or a zero base (exactly -100%) with a positive horizon.
pub fn discount_for_inflation(
    value: f64,
    inflation_rate_fraction: f64,
    years: f64,
) -> Result<f64, EngineError> {
    let base = 1.0 + inflation_rate_fraction;

    if base < 0.0 && years.fract() != 0.0 {
        return Err(EngineError::UndefinedDomain {
            rate_fraction: inflation_rate_fraction,
            years,
        });
    }

    // -100% inflation erases all purchasing power: dividing by 0^years
    if base == 0.0 && years > 0.0 {
        return Err(EngineError::UndefinedDomain {
            rate_fraction: inflation_rate_fraction,
            years,
        });
    }

    Ok(value / base.powf(years))
}

/// Grow a principal at a compound annual rate over a horizon
///
/// Computes `principal * (1 + rate_fraction)^years`. The same negative-base
/// rule applies as for discounting; exactly -100% is fine here (the amount
/// is simply wiped out to zero).
pub fn grow_at_rate(principal: f64, rate_fraction: f64, years: f64) -> Result<f64, EngineError> {
    let base = 1.0 + rate_fraction;

    if base < 0.0 && years.fract() != 0.0 {
        return Err(EngineError::UndefinedDomain { rate_fraction, years });
    }

    Ok(principal * base.powf(years))
}

/// Stateless calculation engine
///
/// Construction is free; the engine holds no data and every call is
/// independent of every other call.
#[derive(Debug, Clone, Copy, Default)]
pub struct InflationEngine;

impl InflationEngine {
    /// Create a new engine
    pub fn new() -> Self {
        Self
    }

    /// Compute the four derived values for one input set
    ///
    /// Input rules are checked before anything is computed, and every output
    /// is checked to be finite before the result is returned, so the caller
    /// never sees a NaN or infinity.
    pub fn compute(&self, input: &CalculationInput) -> Result<CalculationResult, EngineError> {
        input.validate()?;

        let inflation = input.inflation_rate_fraction();
        let risk_free = input.risk_free_rate_fraction();

        let after_inflation = discount_for_inflation(input.principal, inflation, input.years)?;
        let at_risk_free = grow_at_rate(input.principal, risk_free, input.years)?;
        let at_risk_free_after_inflation =
            discount_for_inflation(at_risk_free, inflation, input.years)?;
        let difference = at_risk_free_after_inflation - after_inflation;

        let result = CalculationResult {
            after_inflation,
            at_risk_free,
            at_risk_free_after_inflation,
            difference,
        };

        for (field, value) in [
            ("after_inflation", result.after_inflation),
            ("at_risk_free", result.at_risk_free),
            ("at_risk_free_after_inflation", result.at_risk_free_after_inflation),
            ("difference", result.difference),
        ] {
            if !value.is_finite() {
                return Err(EngineError::Overflow { field });
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn compute(principal: f64, inflation: f64, risk_free: f64, years: f64) -> CalculationResult {
        InflationEngine::new()
            .compute(&CalculationInput::new(principal, inflation, risk_free, years))
            .expect("inputs should be valid")
    }

    #[test]
    fn test_reference_scenario() {
        // $1000 at 3% inflation / 5% risk-free over 10 years
        let r = compute(1000.0, 3.0, 5.0, 10.0);

        assert!((r.after_inflation - 744.09).abs() < 0.01);
        assert!((r.at_risk_free - 1628.89).abs() < 0.01);
        assert!((r.at_risk_free_after_inflation - 1212.05).abs() < 0.01);
        assert!((r.difference - 467.96).abs() < 0.01);
    }

    #[test]
    fn test_zero_rates_identity() {
        let r = compute(500.0, 0.0, 0.0, 5.0);

        assert_eq!(r.after_inflation, 500.0);
        assert_eq!(r.at_risk_free, 500.0);
        assert_eq!(r.at_risk_free_after_inflation, 500.0);
        assert_eq!(r.difference, 0.0);
    }

    #[test]
    fn test_zero_horizon_identity() {
        let r = compute(1000.0, 3.0, 5.0, 0.0);

        assert_eq!(r.after_inflation, 1000.0);
        assert_eq!(r.at_risk_free, 1000.0);
        assert_eq!(r.at_risk_free_after_inflation, 1000.0);
        assert_eq!(r.difference, 0.0);
    }

    #[test]
    fn test_no_inflation_identity() {
        let r = compute(1000.0, 0.0, 5.0, 10.0);

        assert_eq!(r.after_inflation, 1000.0);
        assert_relative_eq!(r.at_risk_free_after_inflation, r.at_risk_free);
    }

    #[test]
    fn test_no_growth_identity() {
        let r = compute(1000.0, 3.0, 0.0, 10.0);
        assert_eq!(r.at_risk_free, 1000.0);
    }

    #[test]
    fn test_after_inflation_decreasing_in_inflation() {
        let low = compute(1000.0, 2.0, 5.0, 10.0);
        let high = compute(1000.0, 4.0, 5.0, 10.0);
        assert!(high.after_inflation < low.after_inflation);

        // Still strictly decreasing close to the -100% boundary
        let deep = compute(1000.0, -99.0, 5.0, 10.0);
        let deeper = compute(1000.0, -99.5, 5.0, 10.0);
        assert!(deep.after_inflation < deeper.after_inflation);
    }

    #[test]
    fn test_at_risk_free_increasing_in_rate() {
        let low = compute(1000.0, 3.0, 2.0, 10.0);
        let high = compute(1000.0, 3.0, 6.0, 10.0);
        assert!(high.at_risk_free > low.at_risk_free);
    }

    #[test]
    fn test_investing_above_inflation_never_loses() {
        for years in [0.0, 1.0, 2.5, 10.0, 40.0] {
            let r = compute(1000.0, 3.0, 5.0, years);
            assert!(
                r.difference >= 0.0,
                "difference {} negative at {} years",
                r.difference,
                years
            );
        }
    }

    #[test]
    fn test_inflation_outpacing_rate_loses() {
        // 10% inflation vs 2% risk-free over one year
        let r = compute(100.0, 10.0, 2.0, 1.0);
        assert!(r.difference < 0.0);
    }

    #[test]
    fn test_deflation_raises_purchasing_power() {
        let r = compute(1000.0, -2.0, 0.0, 10.0);
        assert!(r.after_inflation > 1000.0);
        assert_relative_eq!(r.after_inflation, 1000.0 / 0.98_f64.powi(10), max_relative = 1e-12);
    }

    #[test]
    fn test_zero_principal() {
        let r = compute(0.0, 3.0, 5.0, 10.0);
        assert_abs_diff_eq!(r.after_inflation, 0.0);
        assert_abs_diff_eq!(r.at_risk_free, 0.0);
        assert_abs_diff_eq!(r.difference, 0.0);
    }

    #[test]
    fn test_fractional_horizon() {
        let r = compute(1000.0, 3.0, 5.0, 2.5);
        assert_relative_eq!(r.at_risk_free, 1000.0 * 1.05_f64.powf(2.5), max_relative = 1e-12);
        assert_relative_eq!(
            r.after_inflation,
            1000.0 / 1.03_f64.powf(2.5),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_invalid_input_rejected_before_domain_check() {
        // Both a negative principal and an undefined domain: input wins
        let engine = InflationEngine::new();
        let input = CalculationInput::new(-1.0, -150.0, 5.0, 2.5);
        assert!(matches!(
            engine.compute(&input),
            Err(EngineError::InvalidInput { field: "principal", .. })
        ));
    }

    #[test]
    fn test_undefined_domain_inflation_path() {
        let engine = InflationEngine::new();
        let input = CalculationInput::new(1000.0, -150.0, 5.0, 2.5);
        assert_eq!(
            engine.compute(&input),
            Err(EngineError::UndefinedDomain {
                rate_fraction: -1.5,
                years: 2.5,
            })
        );
    }

    #[test]
    fn test_undefined_domain_risk_free_path() {
        let engine = InflationEngine::new();
        let input = CalculationInput::new(1000.0, 3.0, -150.0, 2.5);
        assert_eq!(
            engine.compute(&input),
            Err(EngineError::UndefinedDomain {
                rate_fraction: -1.5,
                years: 2.5,
            })
        );
    }

    #[test]
    fn test_full_deflation_is_undefined() {
        // Exactly -100% inflation divides by zero for any positive horizon
        let engine = InflationEngine::new();
        let input = CalculationInput::new(1000.0, -100.0, 5.0, 2.0);
        assert!(matches!(
            engine.compute(&input),
            Err(EngineError::UndefinedDomain { .. })
        ));
    }

    #[test]
    fn test_full_loss_growth_is_defined() {
        // -100% risk-free return wipes the investment out, which is defined
        let r = compute(1000.0, 3.0, -100.0, 2.0);
        assert_eq!(r.at_risk_free, 0.0);
    }

    #[test]
    fn test_below_minus_100_whole_years_computes() {
        // Negative base with a whole-number exponent stays in the reals
        let result = discount_for_inflation(1000.0, -1.5, 2.0).unwrap();
        assert_relative_eq!(result, 4000.0, max_relative = 1e-12);

        let odd = discount_for_inflation(1000.0, -1.5, 3.0).unwrap();
        assert_relative_eq!(odd, -8000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_overflow_reported() {
        let engine = InflationEngine::new();
        // 100% annual growth over 10,000 years does not fit in an f64
        let input = CalculationInput::new(1.0e300, 0.0, 100.0, 10_000.0);
        assert_eq!(
            engine.compute(&input),
            Err(EngineError::Overflow { field: "at_risk_free" })
        );
    }

    #[test]
    fn test_discount_keeps_sign_of_value() {
        let positive = discount_for_inflation(100.0, 0.03, 7.0).unwrap();
        let negative = discount_for_inflation(-100.0, 0.03, 7.0).unwrap();
        assert!(positive > 0.0);
        assert!(negative < 0.0);
        assert_relative_eq!(positive, -negative, max_relative = 1e-12);
    }
}
