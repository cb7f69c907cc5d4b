//! Factor Table Module
//!
//! Closed set of categories and activity units, the period each unit is
//! reported in, and the table of emission factors (kg CO₂e per unit).

mod table;
mod units;

pub use table::FactorTable;
pub use units::EmissionUnit;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Emission categories, in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Transport,
    Energy,
    Food,
    Water,
    Shopping,
    Waste,
}

impl Category {
    /// Canonical order. Breakdown layout and tie-breaks depend on it.
    pub const ALL: [Category; 6] = [
        Category::Transport,
        Category::Energy,
        Category::Food,
        Category::Water,
        Category::Shopping,
        Category::Waste,
    ];

    /// Stable identifier, independent of any localized label
    pub fn key(&self) -> &'static str {
        match self {
            Category::Transport => "transport",
            Category::Energy => "energy",
            Category::Food => "food",
            Category::Water => "water",
            Category::Shopping => "shopping",
            Category::Waste => "waste",
        }
    }

    /// Position in `Category::ALL`
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Reporting period of a unit quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
    Annual,
}

impl Period {
    /// Multiplier converting one period's quantity to a year
    pub fn per_year(&self) -> f64 {
        match self {
            Period::Daily => 365.0,
            Period::Weekly => 52.0,
            Period::Monthly => 12.0,
            Period::Annual => 1.0,
        }
    }
}

// Benchmarks, kg CO₂e per person per year. Comparison only.
pub const INDIA_AVERAGE: f64 = 1800.0;
pub const PARIS_TARGET: f64 = 2300.0;
pub const GLOBAL_AVERAGE: f64 = 4000.0;

/// Footprint at which the intensity meter reads 100 %
pub const INTENSITY_CEILING: f64 = 6000.0;

/// kg CO₂e absorbed by one tree per year
pub const TREE_ABSORPTION_KG: f64 = 22.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let keys: Vec<_> = Category::ALL.iter().map(|c| c.key()).collect();
        assert_eq!(keys, ["transport", "energy", "food", "water", "shopping", "waste"]);
        for (i, c) in Category::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn test_period_multipliers() {
        assert_eq!(Period::Daily.per_year(), 365.0);
        assert_eq!(Period::Weekly.per_year(), 52.0);
        assert_eq!(Period::Monthly.per_year(), 12.0);
        assert_eq!(Period::Annual.per_year(), 1.0);
    }

    #[test]
    fn test_category_serde_key() {
        let json = serde_json::to_string(&Category::Shopping).unwrap();
        assert_eq!(json, "\"shopping\"");
    }
}
