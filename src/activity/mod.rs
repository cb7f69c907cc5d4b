//! Activity Inputs
//!
//! One record of self-reported quantities per category. Every field defaults
//! to zero so partial profiles deserialize cleanly.

use serde::{Deserialize, Serialize};

use crate::error::{LensError, LensResult};
use crate::geo::CommuteEmission;

/// Ground travel per day and flights per year
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportActivity {
    pub petrol_car_km: f64,
    pub diesel_car_km: f64,
    pub motorbike_km: f64,
    pub auto_rickshaw_km: f64,
    pub bus_km: f64,
    pub metro_train_km: f64,
    pub domestic_flights: f64,
    pub domestic_flight_hours: f64,
    pub international_flights: f64,
    pub international_flight_hours: f64,
}

/// Transport is either entered by hand or replaced by a computed commute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportInput {
    Manual(TransportActivity),
    Precomputed(CommuteEmission),
}

impl Default for TransportInput {
    fn default() -> Self {
        TransportInput::Manual(TransportActivity::default())
    }
}

/// Household fuel and power, per month
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergyActivity {
    pub electricity_kwh: f64,
    pub lpg_cylinders: f64,
    pub natural_gas_m3: f64,
    pub kerosene_litres: f64,
    pub coal_kg: f64,
    pub generator_diesel_litres: f64,
    pub solar_kwh: f64,
}

/// Meals per week, plus daily eggs and weekly dairy and waste
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodActivity {
    pub beef_mutton_meals: f64,
    pub chicken_pork_meals: f64,
    pub fish_seafood_meals: f64,
    pub eggs_dairy_meals: f64,
    pub vegetarian_meals: f64,
    pub vegan_meals: f64,
    pub eggs_per_day: f64,
    pub dairy_litres_per_week: f64,
    pub food_waste_kg_per_week: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterActivity {
    pub daily_litres: f64,
    pub hot_shower_minutes: f64,
    pub washing_cycles_per_week: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShoppingActivity {
    pub clothing_items_per_month: f64,
    pub small_electronics_per_year: f64,
    pub large_electronics_per_year: f64,
    pub online_orders_per_month: f64,
    pub grocery_1000rs_per_month: f64,
}

/// Weekly kg by disposal route
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WasteActivity {
    pub landfill_kg: f64,
    pub recycled_kg: f64,
    pub composted_kg: f64,
}

/// Everything one footprint calculation consumes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityInputs {
    /// `{manual: {...}}` or `{precomputed: {...}}` in both JSON and YAML
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub transport: TransportInput,
    pub energy: EnergyActivity,
    pub food: FoodActivity,
    pub water: WaterActivity,
    pub shopping: ShoppingActivity,
    pub waste: WasteActivity,
}

impl ActivityInputs {
    /// Substitute a computed commute for whatever transport was entered
    pub fn with_commute(mut self, commute: CommuteEmission) -> Self {
        self.transport = TransportInput::Precomputed(commute);
        self
    }

    /// Reject negative or non-finite quantities
    pub fn validate(&self) -> LensResult<()> {
        let mut fields: Vec<(&str, f64)> = Vec::new();
        match &self.transport {
            TransportInput::Manual(t) => fields.extend([
                ("transport.petrol_car_km", t.petrol_car_km),
                ("transport.diesel_car_km", t.diesel_car_km),
                ("transport.motorbike_km", t.motorbike_km),
                ("transport.auto_rickshaw_km", t.auto_rickshaw_km),
                ("transport.bus_km", t.bus_km),
                ("transport.metro_train_km", t.metro_train_km),
                ("transport.domestic_flights", t.domestic_flights),
                ("transport.domestic_flight_hours", t.domestic_flight_hours),
                ("transport.international_flights", t.international_flights),
                ("transport.international_flight_hours", t.international_flight_hours),
            ]),
            TransportInput::Precomputed(c) => {
                fields.push(("transport.annual_kg_co2e", c.annual_kg_co2e))
            }
        }
        let e = &self.energy;
        fields.extend([
            ("energy.electricity_kwh", e.electricity_kwh),
            ("energy.lpg_cylinders", e.lpg_cylinders),
            ("energy.natural_gas_m3", e.natural_gas_m3),
            ("energy.kerosene_litres", e.kerosene_litres),
            ("energy.coal_kg", e.coal_kg),
            ("energy.generator_diesel_litres", e.generator_diesel_litres),
            ("energy.solar_kwh", e.solar_kwh),
        ]);
        let f = &self.food;
        fields.extend([
            ("food.beef_mutton_meals", f.beef_mutton_meals),
            ("food.chicken_pork_meals", f.chicken_pork_meals),
            ("food.fish_seafood_meals", f.fish_seafood_meals),
            ("food.eggs_dairy_meals", f.eggs_dairy_meals),
            ("food.vegetarian_meals", f.vegetarian_meals),
            ("food.vegan_meals", f.vegan_meals),
            ("food.eggs_per_day", f.eggs_per_day),
            ("food.dairy_litres_per_week", f.dairy_litres_per_week),
            ("food.food_waste_kg_per_week", f.food_waste_kg_per_week),
        ]);
        let w = &self.water;
        fields.extend([
            ("water.daily_litres", w.daily_litres),
            ("water.hot_shower_minutes", w.hot_shower_minutes),
            ("water.washing_cycles_per_week", w.washing_cycles_per_week),
        ]);
        let s = &self.shopping;
        fields.extend([
            ("shopping.clothing_items_per_month", s.clothing_items_per_month),
            ("shopping.small_electronics_per_year", s.small_electronics_per_year),
            ("shopping.large_electronics_per_year", s.large_electronics_per_year),
            ("shopping.online_orders_per_month", s.online_orders_per_month),
            ("shopping.grocery_1000rs_per_month", s.grocery_1000rs_per_month),
        ]);
        let ws = &self.waste;
        fields.extend([
            ("waste.landfill_kg", ws.landfill_kg),
            ("waste.recycled_kg", ws.recycled_kg),
            ("waste.composted_kg", ws.composted_kg),
        ]);

        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(LensError::invalid(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_profile_defaults_to_zero() {
        let json = r#"{"energy": {"electricity_kwh": 100, "lpg_cylinders": 1}}"#;
        let inputs: ActivityInputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.energy.electricity_kwh, 100.0);
        assert_eq!(inputs.energy.coal_kg, 0.0);
        assert_eq!(inputs.transport, TransportInput::default());
    }

    #[test]
    fn test_manual_transport_from_yaml() {
        let yaml = "transport:\n  manual:\n    petrol_car_km: 12\n    domestic_flights: 2\n";
        let inputs: ActivityInputs = serde_yaml::from_str(yaml).unwrap();
        match inputs.transport {
            TransportInput::Manual(t) => {
                assert_eq!(t.petrol_car_km, 12.0);
                assert_eq!(t.domestic_flights, 2.0);
            }
            other => panic!("unexpected transport input: {:?}", other),
        }
    }

    #[test]
    fn test_precomputed_transport_from_yaml() {
        let yaml = "transport:\n  precomputed:\n    origin: Ukkadam\n    destination: Town Hall\n    distance_km: 2.5\n    vehicle: public_bus\n    trips_per_day: 2\n    annual_kg_co2e: 54.75\n";
        let inputs: ActivityInputs = serde_yaml::from_str(yaml).unwrap();
        match inputs.transport {
            TransportInput::Precomputed(c) => assert_eq!(c.annual_kg_co2e, 54.75),
            other => panic!("unexpected transport input: {:?}", other),
        }
    }

    #[test]
    fn test_transport_json_shape_unchanged() {
        let inputs = ActivityInputs::default();
        let json = serde_json::to_value(&inputs).unwrap();
        assert_eq!(json["transport"]["manual"]["petrol_car_km"], 0.0);

        let back: ActivityInputs = serde_json::from_value(json).unwrap();
        assert_eq!(back, inputs);
    }

    #[test]
    fn test_validate_rejects_negative_quantity() {
        let mut inputs = ActivityInputs::default();
        inputs.waste.recycled_kg = -2.0;
        let err = inputs.validate().unwrap_err();
        assert!(err.to_string().contains("waste.recycled_kg"));
    }

    #[test]
    fn test_validate_rejects_nan() {
        let mut inputs = ActivityInputs::default();
        inputs.water.daily_litres = f64::NAN;
        assert!(inputs.validate().is_err());
        assert!(ActivityInputs::default().validate().is_ok());
    }
}
