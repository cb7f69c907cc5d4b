//! Vehicle classes and their per-km emission factors.
//!
//! Kept apart from the category `FactorTable`: these are per-km factors for
//! a single commute, not per-category activity units.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{LensError, LensResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleClass {
    PetrolCar,
    DieselCar,
    Motorbike,
    AutoRickshaw,
    PublicBus,
    Train,
    ElectricVehicle,
    BicycleWalking,
}

impl VehicleClass {
    pub const ALL: [VehicleClass; 8] = [
        VehicleClass::PetrolCar,
        VehicleClass::DieselCar,
        VehicleClass::Motorbike,
        VehicleClass::AutoRickshaw,
        VehicleClass::PublicBus,
        VehicleClass::Train,
        VehicleClass::ElectricVehicle,
        VehicleClass::BicycleWalking,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VehicleClass::PetrolCar => "Car (Petrol)",
            VehicleClass::DieselCar => "Car (Diesel)",
            VehicleClass::Motorbike => "Motorbike",
            VehicleClass::AutoRickshaw => "Auto Rickshaw",
            VehicleClass::PublicBus => "Public Bus",
            VehicleClass::Train => "Train",
            VehicleClass::ElectricVehicle => "Electric Vehicle",
            VehicleClass::BicycleWalking => "Bicycle / Walking",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            VehicleClass::PetrolCar => "petrol_car",
            VehicleClass::DieselCar => "diesel_car",
            VehicleClass::Motorbike => "motorbike",
            VehicleClass::AutoRickshaw => "auto_rickshaw",
            VehicleClass::PublicBus => "public_bus",
            VehicleClass::Train => "train",
            VehicleClass::ElectricVehicle => "electric_vehicle",
            VehicleClass::BicycleWalking => "bicycle_walking",
        }
    }

    fn canonical_factor(&self) -> f64 {
        match self {
            VehicleClass::PetrolCar => 0.21,
            VehicleClass::DieselCar => 0.27,
            VehicleClass::Motorbike => 0.09,
            VehicleClass::AutoRickshaw => 0.07,
            VehicleClass::PublicBus => 0.03,
            VehicleClass::Train => 0.01,
            VehicleClass::ElectricVehicle => 0.02,
            VehicleClass::BicycleWalking => 0.0,
        }
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VehicleClass {
    type Err = LensError;

    /// Accepts the display label or the snake_case key, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        VehicleClass::ALL
            .into_iter()
            .find(|v| v.label().eq_ignore_ascii_case(needle) || v.key().eq_ignore_ascii_case(needle))
            .ok_or_else(|| LensError::UnknownUnit {
                table: "vehicle",
                key: needle.to_string(),
            })
    }
}

/// kg CO₂e per km for each vehicle class
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleFactorTable {
    factors: HashMap<VehicleClass, f64>,
}

impl VehicleFactorTable {
    pub fn canonical() -> Self {
        Self {
            factors: VehicleClass::ALL
                .into_iter()
                .map(|v| (v, v.canonical_factor()))
                .collect(),
        }
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (VehicleClass, f64)>) -> Self {
        Self {
            factors: entries.into_iter().collect(),
        }
    }

    pub fn factor(&self, vehicle: VehicleClass) -> LensResult<f64> {
        self.factors
            .get(&vehicle)
            .copied()
            .ok_or_else(|| LensError::UnknownUnit {
                table: "vehicle",
                key: vehicle.label().to_string(),
            })
    }

    /// `distance_km × factor × trips_per_day × 365`, unrounded.
    ///
    /// Round trips count as two trips; callers double `trips_per_day`.
    pub fn annual_transport_emission(
        &self,
        distance_km: f64,
        vehicle: VehicleClass,
        trips_per_day: u32,
    ) -> LensResult<f64> {
        if !distance_km.is_finite() || distance_km < 0.0 {
            return Err(LensError::invalid(format!(
                "distance must be a non-negative number, got {}",
                distance_km
            )));
        }
        if trips_per_day == 0 {
            return Err(LensError::invalid("trips per day must be at least 1"));
        }
        let factor = self.factor(vehicle)?;
        Ok(distance_km * factor * trips_per_day as f64 * 365.0)
    }
}

impl Default for VehicleFactorTable {
    fn default() -> Self {
        Self::canonical()
    }
}

/// Annual commute emission using the canonical vehicle table
pub fn annual_transport_emission(
    distance_km: f64,
    vehicle: VehicleClass,
    trips_per_day: u32,
) -> LensResult<f64> {
    VehicleFactorTable::canonical().annual_transport_emission(distance_km, vehicle, trips_per_day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label_and_key() {
        assert_eq!("Car (Diesel)".parse::<VehicleClass>(), Ok(VehicleClass::DieselCar));
        assert_eq!("public_bus".parse::<VehicleClass>(), Ok(VehicleClass::PublicBus));
        assert_eq!(" bicycle / walking ".parse::<VehicleClass>(), Ok(VehicleClass::BicycleWalking));
    }

    #[test]
    fn test_parse_unknown_class() {
        let err = "Hovercraft".parse::<VehicleClass>().unwrap_err();
        assert_eq!(err, LensError::UnknownUnit { table: "vehicle", key: "Hovercraft".into() });
    }

    #[test]
    fn test_formula_is_exact() {
        let table = VehicleFactorTable::canonical();
        let d = 12.345;
        let got = table.annual_transport_emission(d, VehicleClass::PetrolCar, 2).unwrap();
        assert_eq!(got, d * 0.21 * 2.0 * 365.0);
    }

    #[test]
    fn test_zero_trips_rejected() {
        let err = annual_transport_emission(10.0, VehicleClass::Train, 0).unwrap_err();
        assert!(matches!(err, LensError::InvalidInput(_)));
    }

    #[test]
    fn test_negative_distance_rejected() {
        assert!(annual_transport_emission(-1.0, VehicleClass::Train, 1).is_err());
    }

    #[test]
    fn test_missing_class_is_unknown_unit() {
        let table = VehicleFactorTable::from_entries([(VehicleClass::Train, 0.01)]);
        let err = table
            .annual_transport_emission(5.0, VehicleClass::ElectricVehicle, 1)
            .unwrap_err();
        assert!(matches!(err, LensError::UnknownUnit { table: "vehicle", .. }));
    }

    #[test]
    fn test_walking_is_zero() {
        assert_eq!(annual_transport_emission(3.0, VehicleClass::BicycleWalking, 4), Ok(0.0));
    }
}
