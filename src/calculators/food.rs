use super::{annualize, CategoryCalculator};
use crate::activity::FoodActivity;
use crate::error::LensResult;
use crate::factors::{Category, EmissionUnit, FactorTable};

impl CategoryCalculator for FoodActivity {
    const CATEGORY: Category = Category::Food;

    fn annual_emission(&self, table: &FactorTable) -> LensResult<f64> {
        annualize(
            table,
            Self::CATEGORY,
            &[
                (EmissionUnit::BeefMuttonMeal, self.beef_mutton_meals),
                (EmissionUnit::ChickenPorkMeal, self.chicken_pork_meals),
                (EmissionUnit::FishSeafoodMeal, self.fish_seafood_meals),
                (EmissionUnit::EggsDairyMeal, self.eggs_dairy_meals),
                (EmissionUnit::VegetarianMeal, self.vegetarian_meals),
                (EmissionUnit::VeganMeal, self.vegan_meals),
                (EmissionUnit::Egg, self.eggs_per_day),
                (EmissionUnit::DairyLitre, self.dairy_litres_per_week),
                (EmissionUnit::FoodWasteKg, self.food_waste_kg_per_week),
            ],
        )
    }
}
