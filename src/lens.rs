//! One-call assessment: footprint, benchmarks and advice.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::accounting::{AccountingEngine, BenchmarkComparison, Breakdown};
use crate::activity::{ActivityInputs, TransportInput};
use crate::advice::{top_category, RecommendationEngine};
use crate::config::LensConfig;
use crate::error::{LensError, LensResult};
use crate::factors::Category;
use crate::geo::{CommuteEmission, CommuteEstimator, VehicleClass};

/// Everything reported for one calculation
#[derive(Debug, Clone, Serialize)]
pub struct FootprintReport {
    pub total: f64,
    pub breakdown: Breakdown,
    pub top_category: Category,
    pub recommendations: Vec<String>,
    pub ai_generated: bool,
    pub benchmark: BenchmarkComparison,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commute: Option<CommuteEmission>,
    pub generated_at: DateTime<Utc>,
}

pub struct CarbonLens {
    accounting: AccountingEngine,
    advice: RecommendationEngine,
    commute: Option<CommuteEstimator>,
}

impl CarbonLens {
    pub fn new(accounting: AccountingEngine, advice: RecommendationEngine) -> Self {
        Self {
            accounting,
            advice,
            commute: None,
        }
    }

    /// Wire every component from configuration
    pub fn from_config(config: &LensConfig) -> anyhow::Result<Self> {
        Ok(Self::new(config.accounting_engine()?, config.recommendation_engine()?)
            .with_commute_estimator(config.commute_estimator()?))
    }

    pub fn with_commute_estimator(mut self, estimator: CommuteEstimator) -> Self {
        self.commute = Some(estimator);
        self
    }

    pub fn accounting(&self) -> &AccountingEngine {
        &self.accounting
    }

    pub async fn estimate_commute(
        &self,
        origin: &str,
        destination: &str,
        vehicle: VehicleClass,
        trips_per_day: u32,
    ) -> LensResult<CommuteEmission> {
        let estimator = self
            .commute
            .as_ref()
            .ok_or_else(|| LensError::invalid("commute estimation is not configured"))?;
        estimator.estimate(origin, destination, vehicle, trips_per_day).await
    }

    /// Validate, compute and advise. Provider trouble never fails this call.
    pub async fn assess(&self, inputs: &ActivityInputs) -> LensResult<FootprintReport> {
        inputs.validate()?;
        let footprint = self.accounting.compute_footprint(inputs)?;
        let recommendations = self.advice.recommend(&footprint).await;

        let commute = match &inputs.transport {
            TransportInput::Precomputed(c) => Some(c.clone()),
            TransportInput::Manual(_) => None,
        };

        let report = FootprintReport {
            total: footprint.total,
            breakdown: footprint.breakdown,
            top_category: top_category(&footprint.breakdown),
            recommendations: recommendations.items,
            ai_generated: recommendations.ai_generated,
            benchmark: footprint.benchmark(),
            commute,
            generated_at: Utc::now(),
        };

        info!(
            "Assessment complete: {:.2} kg CO2e/year, top category {}",
            report.total, report.top_category
        );
        Ok(report)
    }

    /// Estimate a commute, substitute it for the transport inputs, then assess
    pub async fn assess_with_commute(
        &self,
        inputs: ActivityInputs,
        origin: &str,
        destination: &str,
        vehicle: VehicleClass,
        trips_per_day: u32,
    ) -> LensResult<FootprintReport> {
        let commute = self
            .estimate_commute(origin, destination, vehicle, trips_per_day)
            .await?;
        self.assess(&inputs.with_commute(commute)).await
    }
}

impl Default for CarbonLens {
    fn default() -> Self {
        Self::new(AccountingEngine::default(), RecommendationEngine::default())
    }
}
