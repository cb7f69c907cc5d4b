use super::{annualize, CategoryCalculator};
use crate::activity::ShoppingActivity;
use crate::error::LensResult;
use crate::factors::{Category, EmissionUnit, FactorTable};

impl CategoryCalculator for ShoppingActivity {
    const CATEGORY: Category = Category::Shopping;

    fn annual_emission(&self, table: &FactorTable) -> LensResult<f64> {
        annualize(
            table,
            Self::CATEGORY,
            &[
                (EmissionUnit::ClothingItem, self.clothing_items_per_month),
                (EmissionUnit::SmallElectronics, self.small_electronics_per_year),
                (EmissionUnit::LargeElectronics, self.large_electronics_per_year),
                (EmissionUnit::OnlineOrder, self.online_orders_per_month),
                (EmissionUnit::Grocery1000Rs, self.grocery_1000rs_per_month),
            ],
        )
    }
}
