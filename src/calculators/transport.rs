use super::{annualize, CategoryCalculator};
use crate::activity::{TransportActivity, TransportInput};
use crate::error::LensResult;
use crate::factors::{Category, EmissionUnit, FactorTable};

impl CategoryCalculator for TransportActivity {
    const CATEGORY: Category = Category::Transport;

    /// Ground modes are km per day; flights are count × hours per flight,
    /// never converted to a distance.
    fn annual_emission(&self, table: &FactorTable) -> LensResult<f64> {
        annualize(
            table,
            Self::CATEGORY,
            &[
                (EmissionUnit::PetrolCarKm, self.petrol_car_km),
                (EmissionUnit::DieselCarKm, self.diesel_car_km),
                (EmissionUnit::MotorbikeKm, self.motorbike_km),
                (EmissionUnit::AutoRickshawKm, self.auto_rickshaw_km),
                (EmissionUnit::BusKm, self.bus_km),
                (EmissionUnit::MetroTrainKm, self.metro_train_km),
                (
                    EmissionUnit::DomesticFlightHour,
                    self.domestic_flights * self.domestic_flight_hours,
                ),
                (
                    EmissionUnit::InternationalFlightHour,
                    self.international_flights * self.international_flight_hours,
                ),
            ],
        )
    }
}

impl CategoryCalculator for TransportInput {
    const CATEGORY: Category = Category::Transport;

    /// A precomputed commute replaces the manual record outright
    fn annual_emission(&self, table: &FactorTable) -> LensResult<f64> {
        match self {
            TransportInput::Manual(activity) => activity.annual_emission(table),
            TransportInput::Precomputed(commute) => Ok(commute.annual_kg_co2e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::assert_close;
    use crate::geo::{CommuteEmission, VehicleClass};

    #[test]
    fn test_ground_modes_are_daily() {
        let activity = TransportActivity {
            petrol_car_km: 10.0,
            bus_km: 5.0,
            ..Default::default()
        };
        let got = activity.annual_emission(&FactorTable::canonical()).unwrap();
        assert_close(got, (10.0 * 0.21 + 5.0 * 0.03) * 365.0);
    }

    #[test]
    fn test_flights_use_count_times_hours() {
        let activity = TransportActivity {
            domestic_flights: 4.0,
            domestic_flight_hours: 2.0,
            international_flights: 1.0,
            international_flight_hours: 8.0,
            ..Default::default()
        };
        let got = activity.annual_emission(&FactorTable::canonical()).unwrap();
        assert_close(got, 4.0 * 2.0 * 90.0 + 1.0 * 8.0 * 110.0);
    }

    #[test]
    fn test_flight_hours_without_flights_is_zero() {
        let activity = TransportActivity {
            domestic_flight_hours: 2.0,
            international_flight_hours: 8.0,
            ..Default::default()
        };
        assert_eq!(activity.annual_emission(&FactorTable::canonical()).unwrap(), 0.0);
    }

    #[test]
    fn test_precomputed_replaces_manual() {
        let input = TransportInput::Precomputed(CommuteEmission {
            origin: "A".into(),
            destination: "B".into(),
            distance_km: 10.0,
            vehicle: VehicleClass::PetrolCar,
            trips_per_day: 2,
            annual_kg_co2e: 1533.0,
        });
        assert_eq!(input.annual_emission(&FactorTable::canonical()).unwrap(), 1533.0);
    }
}
