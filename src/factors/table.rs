use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::info;

use super::{Category, EmissionUnit};
use crate::error::{LensError, LensResult};

/// Emission factors grouped by category, kg CO₂e per unit per period
#[derive(Debug, Clone, PartialEq)]
pub struct FactorTable {
    factors: HashMap<Category, HashMap<EmissionUnit, f64>>,
}

impl FactorTable {
    /// The canonical table every calculator is wired against
    pub fn canonical() -> Self {
        let mut factors: HashMap<Category, HashMap<EmissionUnit, f64>> = HashMap::new();
        for unit in EmissionUnit::ALL {
            factors
                .entry(unit.category())
                .or_default()
                .insert(unit, unit.canonical_factor());
        }
        Self { factors }
    }

    /// Build a table from explicit entries.
    ///
    /// Units missing here fail lookups with `UnknownUnit`.
    pub fn from_entries(entries: impl IntoIterator<Item = (EmissionUnit, f64)>) -> Self {
        let mut factors: HashMap<Category, HashMap<EmissionUnit, f64>> = HashMap::new();
        for (unit, value) in entries {
            factors.entry(unit.category()).or_default().insert(unit, value);
        }
        Self { factors }
    }

    /// Look up the factor for `unit` within `category`
    pub fn factor(&self, category: Category, unit: EmissionUnit) -> LensResult<f64> {
        self.factors
            .get(&category)
            .and_then(|units| units.get(&unit))
            .copied()
            .ok_or_else(|| LensError::UnknownUnit {
                table: "category",
                key: format!("{}/{:?}", category.key(), unit),
            })
    }

    /// Overlay factors read from a JSON file shaped `{category: {unit: factor}}`
    pub fn with_overrides_from_json(mut self, path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read factor overrides: {:?}", path))?;
        let overrides: HashMap<Category, HashMap<EmissionUnit, f64>> =
            serde_json::from_str(&contents).with_context(|| "Failed to parse factor overrides JSON")?;

        let mut applied = 0usize;
        for (category, units) in overrides {
            for (unit, value) in units {
                if unit.category() != category {
                    anyhow::bail!("Unit {:?} does not belong to category '{}'", unit, category);
                }
                if !value.is_finite() {
                    anyhow::bail!("Factor for {:?} is not a finite number", unit);
                }
                if value < 0.0 && !unit.is_credit() {
                    anyhow::bail!("Factor for {:?} must not be negative", unit);
                }
                self.factors.entry(category).or_default().insert(unit, value);
                applied += 1;
            }
        }

        info!("Applied {} factor overrides from {:?}", applied, path);
        Ok(self)
    }

    /// Units of `category` present in this table
    pub fn units(&self, category: Category) -> Vec<(EmissionUnit, f64)> {
        let mut units: Vec<_> = self
            .factors
            .get(&category)
            .map(|m| m.iter().map(|(u, f)| (*u, *f)).collect())
            .unwrap_or_default();
        units.sort_by_key(|(u, _)| *u);
        units
    }
}

impl Default for FactorTable {
    fn default() -> Self {
        Self::canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_canonical_covers_every_unit() {
        let table = FactorTable::canonical();
        for unit in EmissionUnit::ALL {
            assert!(table.factor(unit.category(), unit).is_ok(), "{:?}", unit);
        }
    }

    #[test]
    fn test_known_values() {
        let table = FactorTable::canonical();
        assert_eq!(table.factor(Category::Energy, EmissionUnit::ElectricityKwh), Ok(0.82));
        assert_eq!(table.factor(Category::Waste, EmissionUnit::RecycledKg), Ok(-0.1));
        assert_eq!(table.factor(Category::Transport, EmissionUnit::DieselCarKm), Ok(0.27));
    }

    #[test]
    fn test_wrong_category_is_unknown_unit() {
        let table = FactorTable::canonical();
        let err = table.factor(Category::Food, EmissionUnit::ElectricityKwh).unwrap_err();
        assert!(matches!(err, LensError::UnknownUnit { table: "category", .. }));
    }

    #[test]
    fn test_missing_entry_is_unknown_unit() {
        let table = FactorTable::from_entries([(EmissionUnit::BusKm, 0.03)]);
        assert!(table.factor(Category::Transport, EmissionUnit::BusKm).is_ok());
        assert!(table.factor(Category::Transport, EmissionUnit::PetrolCarKm).is_err());
    }

    #[test]
    fn test_overrides_from_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"energy": {{"electricity_kwh": 0.71}}, "waste": {{"recycled_kg": -0.2}}}}"#).unwrap();

        let table = FactorTable::canonical().with_overrides_from_json(file.path()).unwrap();
        assert_eq!(table.factor(Category::Energy, EmissionUnit::ElectricityKwh), Ok(0.71));
        assert_eq!(table.factor(Category::Waste, EmissionUnit::RecycledKg), Ok(-0.2));
        assert_eq!(table.factor(Category::Energy, EmissionUnit::LpgCylinder), Ok(63.0));
    }

    #[test]
    fn test_overrides_reject_misplaced_unit() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"food": {{"electricity_kwh": 0.5}}}}"#).unwrap();
        assert!(FactorTable::canonical().with_overrides_from_json(file.path()).is_err());
    }

    #[test]
    fn test_overrides_reject_negative_emitter() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"energy": {{"coal_kg": -1.0}}}}"#).unwrap();
        assert!(FactorTable::canonical().with_overrides_from_json(file.path()).is_err());
    }

    #[test]
    fn test_units_listing_is_sorted() {
        let table = FactorTable::canonical();
        let units = table.units(Category::Waste);
        assert_eq!(
            units.iter().map(|(u, _)| *u).collect::<Vec<_>>(),
            vec![EmissionUnit::LandfillKg, EmissionUnit::RecycledKg, EmissionUnit::CompostedKg]
        );
    }
}
