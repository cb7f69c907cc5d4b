//! Runtime configuration from `CARBON_LENS_*` environment variables.
//!
//! The binary loads `.env` first; the library only reads the process
//! environment.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::accounting::AccountingEngine;
use crate::advice::{
    AdviceThresholds, OpenAiCompatibleProvider, RecommendationEngine, RuleBasedAdvisor,
    DEFAULT_PROVIDER_TIMEOUT,
};
use crate::factors::FactorTable;
use crate::geo::{CommuteEstimator, GeocodingResolver, NominatimBackend, VehicleFactorTable};

pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_USER_AGENT: &str = "carbon_lens_tracker";
const DEFAULT_ADVICE_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Clone, PartialEq)]
pub struct LensConfig {
    pub geocoder_url: String,
    pub user_agent: String,
    pub geocoder_interval: Duration,
    pub geocoder_timeout: Duration,
    pub advice_url: Option<String>,
    pub advice_api_key: Option<String>,
    pub advice_model: String,
    pub advice_timeout: Duration,
    pub factors_file: Option<PathBuf>,
    pub thresholds_file: Option<PathBuf>,
}

impl Default for LensConfig {
    fn default() -> Self {
        Self {
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            geocoder_interval: Duration::from_millis(1000),
            geocoder_timeout: Duration::from_secs(10),
            advice_url: None,
            advice_api_key: None,
            advice_model: DEFAULT_ADVICE_MODEL.to_string(),
            advice_timeout: DEFAULT_PROVIDER_TIMEOUT,
            factors_file: None,
            thresholds_file: None,
        }
    }
}

impl LensConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let millis = |key: &str, default: Duration| -> Result<Duration> {
            match get(key) {
                Some(v) => Ok(Duration::from_millis(
                    v.parse().with_context(|| format!("{} must be whole milliseconds, got '{}'", key, v))?,
                )),
                None => Ok(default),
            }
        };
        let secs = |key: &str, default: Duration| -> Result<Duration> {
            match get(key) {
                Some(v) => Ok(Duration::from_secs(
                    v.parse().with_context(|| format!("{} must be whole seconds, got '{}'", key, v))?,
                )),
                None => Ok(default),
            }
        };

        Ok(Self {
            geocoder_url: get("CARBON_LENS_GEOCODER_URL").unwrap_or(defaults.geocoder_url),
            user_agent: get("CARBON_LENS_USER_AGENT").unwrap_or(defaults.user_agent),
            geocoder_interval: millis("CARBON_LENS_GEOCODER_INTERVAL_MS", defaults.geocoder_interval)?,
            geocoder_timeout: secs("CARBON_LENS_GEOCODER_TIMEOUT_SECS", defaults.geocoder_timeout)?,
            advice_url: get("CARBON_LENS_ADVICE_URL"),
            advice_api_key: get("CARBON_LENS_ADVICE_API_KEY"),
            advice_model: get("CARBON_LENS_ADVICE_MODEL").unwrap_or(defaults.advice_model),
            advice_timeout: secs("CARBON_LENS_ADVICE_TIMEOUT_SECS", defaults.advice_timeout)?,
            factors_file: get("CARBON_LENS_FACTORS_FILE").map(PathBuf::from),
            thresholds_file: get("CARBON_LENS_THRESHOLDS_FILE").map(PathBuf::from),
        })
    }

    /// Canonical factors, with the override file applied when configured
    pub fn factor_table(&self) -> Result<FactorTable> {
        match &self.factors_file {
            Some(path) => FactorTable::canonical().with_overrides_from_json(path),
            None => Ok(FactorTable::canonical()),
        }
    }

    pub fn accounting_engine(&self) -> Result<AccountingEngine> {
        Ok(AccountingEngine::new(self.factor_table()?))
    }

    pub fn recommendation_engine(&self) -> Result<RecommendationEngine> {
        let thresholds = match &self.thresholds_file {
            Some(path) => AdviceThresholds::from_json_file(path)?,
            None => AdviceThresholds::default(),
        };
        let engine = RecommendationEngine::rule_based(RuleBasedAdvisor::new(thresholds))
            .with_timeout(self.advice_timeout);

        match &self.advice_url {
            Some(url) => {
                let provider = OpenAiCompatibleProvider::new(
                    url.clone(),
                    self.advice_api_key.clone(),
                    self.advice_model.clone(),
                    self.advice_timeout,
                )?;
                info!("Advice provider enabled: {} ({})", url, provider.model());
                Ok(engine.with_provider(Arc::new(provider)))
            }
            None => Ok(engine),
        }
    }

    pub fn geocoding_resolver(&self) -> Result<GeocodingResolver> {
        let backend = NominatimBackend::new(
            self.geocoder_url.clone(),
            &self.user_agent,
            self.geocoder_timeout,
        )?;
        Ok(GeocodingResolver::new(Arc::new(backend), self.geocoder_interval))
    }

    pub fn commute_estimator(&self) -> Result<CommuteEstimator> {
        Ok(CommuteEstimator::new(
            Arc::new(self.geocoding_resolver()?),
            VehicleFactorTable::canonical(),
        ))
    }
}
