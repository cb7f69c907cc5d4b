use super::{annualize, CategoryCalculator};
use crate::activity::WaterActivity;
use crate::error::LensResult;
use crate::factors::{Category, EmissionUnit, FactorTable};

impl CategoryCalculator for WaterActivity {
    const CATEGORY: Category = Category::Water;

    fn annual_emission(&self, table: &FactorTable) -> LensResult<f64> {
        annualize(
            table,
            Self::CATEGORY,
            &[
                (EmissionUnit::WaterLitre, self.daily_litres),
                (EmissionUnit::HotShowerMinute, self.hot_shower_minutes),
                (EmissionUnit::WashingCycle, self.washing_cycles_per_week),
            ],
        )
    }
}
