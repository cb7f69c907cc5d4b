//! Category Calculators
//!
//! Each category's activity record converts itself into one annual kg CO₂e
//! subtotal. Quantities are grouped by reporting period, summed, and scaled
//! to a year; nothing is rounded here.

mod energy;
mod food;
mod shopping;
mod transport;
mod waste;
mod water;

use crate::error::LensResult;
use crate::factors::{Category, EmissionUnit, FactorTable, Period};

/// One category's annual emission from its activity record
pub trait CategoryCalculator {
    const CATEGORY: Category;

    fn annual_emission(&self, table: &FactorTable) -> LensResult<f64>;
}

/// Σ quantity × factor per period, each period sum scaled to a year
pub(crate) fn annualize(
    table: &FactorTable,
    category: Category,
    terms: &[(EmissionUnit, f64)],
) -> LensResult<f64> {
    const PERIODS: [Period; 4] = [Period::Daily, Period::Weekly, Period::Monthly, Period::Annual];

    let mut per_period = [0.0_f64; 4];
    for &(unit, quantity) in terms {
        let factor = table.factor(category, unit)?;
        let slot = match unit.period() {
            Period::Daily => 0,
            Period::Weekly => 1,
            Period::Monthly => 2,
            Period::Annual => 3,
        };
        per_period[slot] += quantity * factor;
    }

    Ok(PERIODS
        .iter()
        .zip(per_period)
        .map(|(period, sum)| sum * period.per_year())
        .sum())
}

#[cfg(test)]
pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}
