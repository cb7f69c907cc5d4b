//! Rate Limiter
//!
//! Spaces outbound geocoding lookups at least one interval apart so bursty
//! callers are never throttled or banned by the upstream service.

use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{sleep_until, Instant};
use tracing::debug;

/// Hard floor on the spacing between two lookups
pub const MIN_LOOKUP_INTERVAL: Duration = Duration::from_secs(1);

/// Minimum-interval gate; one caller passes per interval
pub struct MinIntervalGate {
    interval: Duration,
    last_pass: Mutex<Option<Instant>>,
}

impl MinIntervalGate {
    /// Intervals below `MIN_LOOKUP_INTERVAL` are raised to it
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(MIN_LOOKUP_INTERVAL),
            last_pass: Mutex::new(None),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait until a full interval has elapsed since the previous pass.
    ///
    /// The lock is held while sleeping, so concurrent callers queue up.
    pub async fn wait_turn(&self) {
        let mut last_pass = self.last_pass.lock().await;
        if let Some(last) = *last_pass {
            let ready_at = last + self.interval;
            if Instant::now() < ready_at {
                debug!("Geocoding gate: waiting {:?}", ready_at - Instant::now());
                sleep_until(ready_at).await;
            }
        }
        *last_pass = Some(Instant::now());
    }

    /// Forget the previous pass
    pub async fn reset(&self) {
        *self.last_pass.lock().await = None;
    }
}

impl Default for MinIntervalGate {
    fn default() -> Self {
        Self::new(MIN_LOOKUP_INTERVAL)
    }
}
