use super::{annualize, CategoryCalculator};
use crate::activity::WasteActivity;
use crate::error::LensResult;
use crate::factors::{Category, EmissionUnit, FactorTable};

impl CategoryCalculator for WasteActivity {
    const CATEGORY: Category = Category::Waste;

    /// Recycling and composting carry negative factors; the subtotal may go
    /// below zero and is not clamped.
    fn annual_emission(&self, table: &FactorTable) -> LensResult<f64> {
        annualize(
            table,
            Self::CATEGORY,
            &[
                (EmissionUnit::LandfillKg, self.landfill_kg),
                (EmissionUnit::RecycledKg, self.recycled_kg),
                (EmissionUnit::CompostedKg, self.composted_kg),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::assert_close;

    #[test]
    fn test_credits_drive_subtotal_negative() {
        let activity = WasteActivity {
            landfill_kg: 0.0,
            recycled_kg: 2.0,
            composted_kg: 1.0,
        };
        let got = activity.annual_emission(&FactorTable::canonical()).unwrap();
        assert_close(got, -13.0);
    }

    #[test]
    fn test_landfill_offsets() {
        let activity = WasteActivity {
            landfill_kg: 5.0,
            recycled_kg: 2.0,
            composted_kg: 1.0,
        };
        let got = activity.annual_emission(&FactorTable::canonical()).unwrap();
        assert_close(got, (5.0 * 0.5 - 0.2 - 0.05) * 52.0);
    }

    #[test]
    fn test_missing_factor_is_loud() {
        let table = FactorTable::from_entries([(EmissionUnit::LandfillKg, 0.5)]);
        assert!(WasteActivity::default().annual_emission(&table).is_err());
    }
}
