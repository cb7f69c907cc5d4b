use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use super::{distance_km, GeocodingResolver, VehicleClass, VehicleFactorTable};
use crate::error::{LensError, LensResult};

/// An annual commute emission computed from two place names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommuteEmission {
    pub origin: String,
    pub destination: String,
    pub distance_km: f64,
    pub vehicle: VehicleClass,
    pub trips_per_day: u32,
    pub annual_kg_co2e: f64,
}

/// Resolves both ends of a trip and converts the distance to annual emissions
pub struct CommuteEstimator {
    resolver: Arc<GeocodingResolver>,
    vehicles: VehicleFactorTable,
}

impl CommuteEstimator {
    pub fn new(resolver: Arc<GeocodingResolver>, vehicles: VehicleFactorTable) -> Self {
        Self { resolver, vehicles }
    }

    pub fn resolver(&self) -> &GeocodingResolver {
        &self.resolver
    }

    /// Estimate one commute.
    ///
    /// Inputs are checked before any lookup; the origin is resolved first
    /// and a failure there stops the destination lookup.
    pub async fn estimate(
        &self,
        origin: &str,
        destination: &str,
        vehicle: VehicleClass,
        trips_per_day: u32,
    ) -> LensResult<CommuteEmission> {
        if origin.trim().is_empty() || destination.trim().is_empty() {
            return Err(LensError::invalid("both locations are required"));
        }
        if trips_per_day == 0 {
            return Err(LensError::invalid("trips per day must be at least 1"));
        }
        // Fail on an unwired vehicle before spending a lookup.
        self.vehicles.factor(vehicle)?;

        let from = self.resolver.resolve(origin).await?;
        let to = self.resolver.resolve(destination).await?;

        let distance = distance_km(from, to);
        let annual = self
            .vehicles
            .annual_transport_emission(distance, vehicle, trips_per_day)?;

        info!(
            "Commute {} -> {}: {:.2} km by {}, {} trips/day, {:.2} kg CO2e/year",
            origin.trim(),
            destination.trim(),
            distance,
            vehicle,
            trips_per_day,
            annual
        );

        Ok(CommuteEmission {
            origin: origin.trim().to_string(),
            destination: destination.trim().to_string(),
            distance_km: distance,
            vehicle,
            trips_per_day,
            annual_kg_co2e: annual,
        })
    }
}
