//! Geo Module
//!
//! Place-name resolution, geodesic distance and commute emissions.

mod commute;
mod distance;
mod geocoder;
mod rate_limit;
mod vehicle;

pub use commute::{CommuteEmission, CommuteEstimator};
pub use distance::{distance_km, haversine_km};
pub use geocoder::{GeocodingBackend, GeocodingResolver, NominatimBackend};
pub use rate_limit::{MinIntervalGate, MIN_LOOKUP_INTERVAL};
pub use vehicle::{annual_transport_emission, VehicleClass, VehicleFactorTable};

use serde::Serialize;

use crate::error::{LensError, LensResult};

/// Latitude and longitude in decimal degrees.
///
/// Only the resolver produces these outside of this crate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    pub(crate) fn new(lat: f64, lon: f64) -> LensResult<Self> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(LensError::invalid(format!("latitude out of range: {}", lat)));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(LensError::invalid(format!("longitude out of range: {}", lon)));
        }
        Ok(Self { lat, lon })
    }

    pub fn latitude(&self) -> f64 {
        self.lat
    }

    pub fn longitude(&self) -> f64 {
        self.lon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_bounds() {
        assert!(Coordinate::new(90.0, -180.0).is_ok());
        assert!(Coordinate::new(-90.1, 0.0).is_err());
        assert!(Coordinate::new(0.0, 180.5).is_err());
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
    }
}
