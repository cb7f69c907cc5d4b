use serde::{Deserialize, Serialize};

use super::{Category, Period};

/// Every activity unit a calculator references
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmissionUnit {
    // Transport
    PetrolCarKm,
    DieselCarKm,
    MotorbikeKm,
    AutoRickshawKm,
    BusKm,
    MetroTrainKm,
    DomesticFlightHour,
    InternationalFlightHour,
    // Energy
    ElectricityKwh,
    LpgCylinder,
    NaturalGasM3,
    KeroseneLitre,
    CoalKg,
    GeneratorDieselLitre,
    SolarKwh,
    // Food
    BeefMuttonMeal,
    ChickenPorkMeal,
    FishSeafoodMeal,
    EggsDairyMeal,
    VegetarianMeal,
    VeganMeal,
    Egg,
    DairyLitre,
    FoodWasteKg,
    // Water
    WaterLitre,
    HotShowerMinute,
    WashingCycle,
    // Shopping
    ClothingItem,
    SmallElectronics,
    LargeElectronics,
    OnlineOrder,
    #[serde(rename = "grocery_1000rs")]
    Grocery1000Rs,
    // Waste
    LandfillKg,
    RecycledKg,
    CompostedKg,
}

use EmissionUnit::*;

impl EmissionUnit {
    pub const ALL: [EmissionUnit; 35] = [
        PetrolCarKm, DieselCarKm, MotorbikeKm, AutoRickshawKm, BusKm, MetroTrainKm,
        DomesticFlightHour, InternationalFlightHour,
        ElectricityKwh, LpgCylinder, NaturalGasM3, KeroseneLitre, CoalKg,
        GeneratorDieselLitre, SolarKwh,
        BeefMuttonMeal, ChickenPorkMeal, FishSeafoodMeal, EggsDairyMeal, VegetarianMeal,
        VeganMeal, Egg, DairyLitre, FoodWasteKg,
        WaterLitre, HotShowerMinute, WashingCycle,
        ClothingItem, SmallElectronics, LargeElectronics, OnlineOrder, Grocery1000Rs,
        LandfillKg, RecycledKg, CompostedKg,
    ];

    pub fn category(&self) -> Category {
        match self {
            PetrolCarKm | DieselCarKm | MotorbikeKm | AutoRickshawKm | BusKm | MetroTrainKm
            | DomesticFlightHour | InternationalFlightHour => Category::Transport,
            ElectricityKwh | LpgCylinder | NaturalGasM3 | KeroseneLitre | CoalKg
            | GeneratorDieselLitre | SolarKwh => Category::Energy,
            BeefMuttonMeal | ChickenPorkMeal | FishSeafoodMeal | EggsDairyMeal | VegetarianMeal
            | VeganMeal | Egg | DairyLitre | FoodWasteKg => Category::Food,
            WaterLitre | HotShowerMinute | WashingCycle => Category::Water,
            ClothingItem | SmallElectronics | LargeElectronics | OnlineOrder | Grocery1000Rs => {
                Category::Shopping
            }
            LandfillKg | RecycledKg | CompostedKg => Category::Waste,
        }
    }

    /// Period the quantity for this unit is reported in
    pub fn period(&self) -> Period {
        match self {
            PetrolCarKm | DieselCarKm | MotorbikeKm | AutoRickshawKm | BusKm | MetroTrainKm => {
                Period::Daily
            }
            // flight count per year × hours per flight
            DomesticFlightHour | InternationalFlightHour => Period::Annual,
            ElectricityKwh | LpgCylinder | NaturalGasM3 | KeroseneLitre | CoalKg
            | GeneratorDieselLitre | SolarKwh => Period::Monthly,
            BeefMuttonMeal | ChickenPorkMeal | FishSeafoodMeal | EggsDairyMeal | VegetarianMeal
            | VeganMeal | DairyLitre | FoodWasteKg => Period::Weekly,
            Egg => Period::Daily,
            WaterLitre | HotShowerMinute => Period::Daily,
            WashingCycle => Period::Weekly,
            ClothingItem | OnlineOrder | Grocery1000Rs => Period::Monthly,
            SmallElectronics | LargeElectronics => Period::Annual,
            LandfillKg | RecycledKg | CompostedKg => Period::Weekly,
        }
    }

    /// Disposal routes credited with a negative factor
    pub fn is_credit(&self) -> bool {
        matches!(self, RecycledKg | CompostedKg)
    }

    pub fn description(&self) -> &'static str {
        match self {
            PetrolCarKm => "km driven per day in a petrol car",
            DieselCarKm => "km driven per day in a diesel car",
            MotorbikeKm => "km ridden per day on a motorbike",
            AutoRickshawKm => "km per day by auto-rickshaw",
            BusKm => "km per day by bus",
            MetroTrainKm => "km per day by metro or train",
            DomesticFlightHour => "hours flown per year on domestic flights",
            InternationalFlightHour => "hours flown per year on international flights",
            ElectricityKwh => "grid electricity per month (kWh)",
            LpgCylinder => "LPG cylinders per month",
            NaturalGasM3 => "piped natural gas per month (m³)",
            KeroseneLitre => "kerosene per month (litres)",
            CoalKg => "coal per month (kg)",
            GeneratorDieselLitre => "generator diesel per month (litres)",
            SolarKwh => "rooftop solar per month (kWh)",
            BeefMuttonMeal => "beef or mutton meals per week",
            ChickenPorkMeal => "chicken or pork meals per week",
            FishSeafoodMeal => "fish or seafood meals per week",
            EggsDairyMeal => "egg or dairy based meals per week",
            VegetarianMeal => "vegetarian meals per week",
            VeganMeal => "vegan meals per week",
            Egg => "eggs per day",
            DairyLitre => "dairy per week (litres)",
            FoodWasteKg => "food wasted per week (kg)",
            WaterLitre => "water used per day (litres)",
            HotShowerMinute => "hot shower per day (minutes)",
            WashingCycle => "washing machine cycles per week",
            ClothingItem => "clothing items bought per month",
            SmallElectronics => "small electronics bought per year",
            LargeElectronics => "large electronics bought per year",
            OnlineOrder => "online orders per month",
            Grocery1000Rs => "grocery spend per month (per ₹1000)",
            LandfillKg => "waste sent to landfill per week (kg)",
            RecycledKg => "waste recycled per week (kg)",
            CompostedKg => "waste composted per week (kg)",
        }
    }

    /// Canonical factor, kg CO₂e per unit per period
    pub(crate) fn canonical_factor(&self) -> f64 {
        match self {
            PetrolCarKm => 0.21,
            DieselCarKm => 0.27,
            MotorbikeKm => 0.09,
            AutoRickshawKm => 0.07,
            BusKm => 0.03,
            MetroTrainKm => 0.01,
            DomesticFlightHour => 90.0,
            InternationalFlightHour => 110.0,
            ElectricityKwh => 0.82,
            LpgCylinder => 63.0,
            NaturalGasM3 => 2.04,
            KeroseneLitre => 2.54,
            CoalKg => 2.42,
            GeneratorDieselLitre => 2.68,
            SolarKwh => 0.0,
            BeefMuttonMeal => 3.6,
            ChickenPorkMeal => 1.1,
            FishSeafoodMeal => 1.4,
            EggsDairyMeal => 0.8,
            VegetarianMeal => 0.5,
            VeganMeal => 0.3,
            Egg => 0.2,
            DairyLitre => 1.3,
            FoodWasteKg => 2.5,
            WaterLitre => 0.000298,
            HotShowerMinute => 0.135,
            WashingCycle => 0.6,
            ClothingItem => 10.0,
            SmallElectronics => 50.0,
            LargeElectronics => 300.0,
            OnlineOrder => 0.5,
            Grocery1000Rs => 2.0,
            LandfillKg => 0.5,
            RecycledKg => -0.1,
            CompostedKg => -0.05,
        }
    }
}
