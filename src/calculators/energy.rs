use super::{annualize, CategoryCalculator};
use crate::activity::EnergyActivity;
use crate::error::LensResult;
use crate::factors::{Category, EmissionUnit, FactorTable};

impl CategoryCalculator for EnergyActivity {
    const CATEGORY: Category = Category::Energy;

    fn annual_emission(&self, table: &FactorTable) -> LensResult<f64> {
        annualize(
            table,
            Self::CATEGORY,
            &[
                (EmissionUnit::ElectricityKwh, self.electricity_kwh),
                (EmissionUnit::LpgCylinder, self.lpg_cylinders),
                (EmissionUnit::NaturalGasM3, self.natural_gas_m3),
                (EmissionUnit::KeroseneLitre, self.kerosene_litres),
                (EmissionUnit::CoalKg, self.coal_kg),
                (EmissionUnit::GeneratorDieselLitre, self.generator_diesel_litres),
                (EmissionUnit::SolarKwh, self.solar_kwh),
            ],
        )
    }
}
