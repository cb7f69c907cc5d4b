//! Geocoding Resolver
//!
//! Resolves free-text place names to coordinates through OpenStreetMap's
//! Nominatim service (no API key required).

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, warn};

use super::rate_limit::MinIntervalGate;
use super::Coordinate;
use crate::error::{LensError, LensResult};

/// A place-name lookup service
#[async_trait]
pub trait GeocodingBackend: Send + Sync {
    /// First match as (latitude, longitude), or `None` when nothing matched
    async fn lookup(&self, query: &str) -> Result<Option<(f64, f64)>>;
}

/// Nominatim search endpoint
pub struct NominatimBackend {
    client: Client,
    base_url: String,
}

impl NominatimBackend {
    pub fn new(base_url: impl Into<String>, user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .context("Failed to build geocoding HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn parse_response(body: &Value) -> Result<Option<(f64, f64)>> {
        let results = body
            .as_array()
            .context("Geocoding response is not a JSON array")?;

        let Some(first) = results.first() else {
            return Ok(None);
        };

        let lat = coordinate_field(first, "lat")?;
        let lon = coordinate_field(first, "lon")?;
        Ok(Some((lat, lon)))
    }
}

// Nominatim sends coordinates as strings; accept numbers too.
fn coordinate_field(entry: &Value, name: &str) -> Result<f64> {
    match &entry[name] {
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .with_context(|| format!("Field '{}' is not a number: {}", name, s)),
        Value::Number(n) => n
            .as_f64()
            .with_context(|| format!("Field '{}' is out of range", name)),
        other => anyhow::bail!("Field '{}' missing or malformed: {}", name, other),
    }
}

#[async_trait]
impl GeocodingBackend for NominatimBackend {
    async fn lookup(&self, query: &str) -> Result<Option<(f64, f64)>> {
        let url = format!(
            "{}/search?q={}&format=json&limit=1",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(query)
        );

        debug!("Geocoding lookup: {}", query);

        let body: Value = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to send geocoding request")?
            .error_for_status()
            .context("Geocoding service returned an error status")?
            .json()
            .await
            .context("Failed to read geocoding response")?;

        Self::parse_response(&body)
    }
}

/// Rate-limited, caching front for a `GeocodingBackend`
pub struct GeocodingResolver {
    backend: Arc<dyn GeocodingBackend>,
    gate: MinIntervalGate,
    cache: RwLock<HashMap<String, Coordinate>>,
    lookup_lock: Mutex<()>,
}

impl GeocodingResolver {
    pub fn new(backend: Arc<dyn GeocodingBackend>, min_interval: Duration) -> Self {
        Self {
            backend,
            gate: MinIntervalGate::new(min_interval),
            cache: RwLock::new(HashMap::new()),
            lookup_lock: Mutex::new(()),
        }
    }

    fn cache_key(place_name: &str) -> String {
        place_name.trim().to_lowercase()
    }

    async fn cached(&self, key: &str) -> Option<Coordinate> {
        self.cache.read().await.get(key).copied()
    }

    /// Resolve a place name to its first matching coordinate.
    ///
    /// Every failure after input validation becomes `LocationNotFound`
    /// carrying `place_name` as given. A single attempt is made.
    pub async fn resolve(&self, place_name: &str) -> LensResult<Coordinate> {
        let query = place_name.trim();
        if query.is_empty() {
            return Err(LensError::invalid("place name must not be empty"));
        }

        let key = Self::cache_key(query);
        if let Some(coord) = self.cached(&key).await {
            debug!("Geocoding cache hit for '{}'", query);
            return Ok(coord);
        }

        // Serialize misses so a name is never looked up twice concurrently.
        let _guard = self.lookup_lock.lock().await;
        if let Some(coord) = self.cached(&key).await {
            return Ok(coord);
        }

        self.gate.wait_turn().await;

        let coord = match self.backend.lookup(query).await {
            Ok(Some((lat, lon))) => Coordinate::new(lat, lon).map_err(|e| {
                warn!("Geocoding returned unusable coordinate for '{}': {}", query, e);
                LensError::not_found(place_name)
            })?,
            Ok(None) => {
                debug!("No geocoding match for '{}'", query);
                return Err(LensError::not_found(place_name));
            }
            Err(e) => {
                warn!("Geocoding lookup failed for '{}': {:#}", query, e);
                return Err(LensError::not_found(place_name));
            }
        };

        self.cache.write().await.insert(key, coord);
        Ok(coord)
    }

    /// Drop cached coordinates, e.g. between user actions
    pub async fn clear_cache(&self) {
        self.cache.write().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingBackend {
        calls: AtomicUsize,
        answer: Option<(f64, f64)>,
    }

    #[async_trait]
    impl GeocodingBackend for CountingBackend {
        async fn lookup(&self, _query: &str) -> Result<Option<(f64, f64)>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.answer)
        }
    }

    struct FailingBackend;

    #[async_trait]
    impl GeocodingBackend for FailingBackend {
        async fn lookup(&self, _query: &str) -> Result<Option<(f64, f64)>> {
            anyhow::bail!("connection reset by peer")
        }
    }

    fn resolver_with(answer: Option<(f64, f64)>) -> (Arc<CountingBackend>, GeocodingResolver) {
        let backend = Arc::new(CountingBackend { calls: AtomicUsize::new(0), answer });
        let resolver = GeocodingResolver::new(backend.clone(), Duration::from_secs(1));
        (backend, resolver)
    }

    #[test]
    fn test_parse_nominatim_strings() {
        let body = json!([{"place_id": 1, "lat": "11.0168", "lon": "76.9558", "display_name": "Coimbatore"}]);
        assert_eq!(NominatimBackend::parse_response(&body).unwrap(), Some((11.0168, 76.9558)));
    }

    #[test]
    fn test_parse_empty_result() {
        assert_eq!(NominatimBackend::parse_response(&json!([])).unwrap(), None);
    }

    #[test]
    fn test_parse_malformed_body() {
        assert!(NominatimBackend::parse_response(&json!({"error": "bad"})).is_err());
        assert!(NominatimBackend::parse_response(&json!([{"lat": "north"}])).is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_name_never_calls_backend() {
        let (backend, resolver) = resolver_with(Some((1.0, 2.0)));
        let err = resolver.resolve("   ").await.unwrap_err();
        assert!(matches!(err, LensError::InvalidInput(_)));
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_match_carries_original_input() {
        let (_, resolver) = resolver_with(None);
        let err = resolver.resolve(" Atlantis ").await.unwrap_err();
        assert_eq!(err, LensError::LocationNotFound { place: " Atlantis ".into() });
    }

    #[tokio::test(start_paused = true)]
    async fn test_backend_error_is_normalized() {
        let resolver = GeocodingResolver::new(Arc::new(FailingBackend), Duration::from_secs(1));
        let err = resolver.resolve("Coimbatore").await.unwrap_err();
        assert_eq!(err, LensError::not_found("Coimbatore"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_out_of_range_coordinate_is_not_found() {
        let (_, resolver) = resolver_with(Some((123.0, 10.0)));
        let err = resolver.resolve("Nowhere").await.unwrap_err();
        assert!(matches!(err, LensError::LocationNotFound { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeated_name_is_cached() {
        let (backend, resolver) = resolver_with(Some((11.0, 77.0)));
        let a = resolver.resolve("Coimbatore").await.unwrap();
        let b = resolver.resolve("  coimbatore ").await.unwrap();
        assert_eq!(a, b);
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);

        resolver.clear_cache().await;
        resolver.resolve("Coimbatore").await.unwrap();
        assert_eq!(backend.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failures_are_not_cached() {
        let (backend, resolver) = resolver_with(None);
        let _ = resolver.resolve("Atlantis").await;
        let _ = resolver.resolve("Atlantis").await;
        assert_eq!(backend.calls.load(Ordering::SeqCst), 2);
    }
}
