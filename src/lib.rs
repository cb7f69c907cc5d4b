//! Carbon Lens
//!
//! Personal carbon footprint engine:
//! - Activity inputs across six categories, annualized with fixed factors
//! - Commute estimation from place names (geocoding + geodesic distance)
//! - Benchmark comparison against India, Paris-target and global averages
//! - Rule-based advice, optionally replaced by an LLM provider

pub mod accounting;
pub mod activity;
pub mod advice;
pub mod calculators;
pub mod config;
pub mod error;
pub mod factors;
pub mod geo;
pub mod lens;

// Re-exports for convenience
pub use accounting::{AccountingEngine, BenchmarkComparison, Breakdown, Footprint, FootprintStatus};
pub use activity::{ActivityInputs, TransportInput};
pub use advice::{AdviceProvider, RecommendationEngine, RuleBasedAdvisor};
pub use config::LensConfig;
pub use error::{LensError, LensResult};
pub use factors::{Category, EmissionUnit, FactorTable};
pub use geo::{CommuteEmission, CommuteEstimator, GeocodingResolver, VehicleClass};
pub use lens::{CarbonLens, FootprintReport};
