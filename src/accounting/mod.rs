//! Accounting Engine
//!
//! Runs every category calculator once, in canonical order, and reports the
//! breakdown and total rounded to two decimals. Rounding happens only here.

mod benchmark;

pub use benchmark::{BenchmarkComparison, FootprintStatus};

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::{debug, info};

use crate::activity::ActivityInputs;
use crate::calculators::CategoryCalculator;
use crate::error::LensResult;
use crate::factors::{Category, FactorTable};

/// Round to two decimals for reporting
pub fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    // no "-0.00" in reports
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Per-category subtotals in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Breakdown {
    subtotals: [f64; 6],
}

impl Breakdown {
    /// Subtotals listed in `Category::ALL` order
    pub fn from_subtotals(subtotals: [f64; 6]) -> Self {
        Self { subtotals }
    }

    pub fn with(mut self, category: Category, value: f64) -> Self {
        self.subtotals[category.index()] = value;
        self
    }

    pub fn get(&self, category: Category) -> f64 {
        self.subtotals[category.index()]
    }

    /// (category, subtotal) pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL
            .into_iter()
            .map(move |c| (c, self.subtotals[c.index()]))
    }

    pub fn sum(&self) -> f64 {
        self.subtotals.iter().sum()
    }

    fn rounded(&self) -> Self {
        Self {
            subtotals: self.subtotals.map(round2),
        }
    }
}

impl Serialize for Breakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::ALL.len()))?;
        for (category, value) in self.iter() {
            map.serialize_entry(category.key(), &value)?;
        }
        map.end()
    }
}

/// Annual footprint in kg CO₂e
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Footprint {
    pub total: f64,
    pub breakdown: Breakdown,
}

impl Footprint {
    pub fn benchmark(&self) -> BenchmarkComparison {
        BenchmarkComparison::for_total(self.total)
    }
}

/// Orchestrates the category calculators against one factor table
#[derive(Debug, Clone, Default)]
pub struct AccountingEngine {
    table: FactorTable,
}

impl AccountingEngine {
    pub fn new(table: FactorTable) -> Self {
        Self { table }
    }

    pub fn factor_table(&self) -> &FactorTable {
        &self.table
    }

    /// Compute the footprint. Calculator errors propagate unchanged and no
    /// partial result is returned.
    pub fn compute_footprint(&self, inputs: &ActivityInputs) -> LensResult<Footprint> {
        let raw = Breakdown::from_subtotals([
            inputs.transport.annual_emission(&self.table)?,
            inputs.energy.annual_emission(&self.table)?,
            inputs.food.annual_emission(&self.table)?,
            inputs.water.annual_emission(&self.table)?,
            inputs.shopping.annual_emission(&self.table)?,
            inputs.waste.annual_emission(&self.table)?,
        ]);

        for (category, value) in raw.iter() {
            debug!("Subtotal {}: {:.4} kg CO2e", category, value);
        }

        let total = round2(raw.sum());
        info!("Footprint total: {:.2} kg CO2e/year", total);

        Ok(Footprint {
            total,
            breakdown: raw.rounded(),
        })
    }
}
