//! Error Taxonomy
//!
//! User-facing errors (`InvalidInput`, `LocationNotFound`) are expected and
//! recoverable. `UnknownUnit` marks a wiring defect and is never defaulted away.

use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by the accounting, geocoding and distance layers
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LensError {
    /// Malformed or empty required input, detected before any external call
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Geocoding produced no match or the lookup failed in any way
    #[error("could not find location: {place}")]
    LocationNotFound { place: String },

    /// A key absent from its factor table
    #[error("unknown unit '{key}' in {table} factor table")]
    UnknownUnit { table: &'static str, key: String },
}

impl LensError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        LensError::InvalidInput(msg.into())
    }

    pub fn not_found(place: impl Into<String>) -> Self {
        LensError::LocationNotFound { place: place.into() }
    }

    /// Message suitable for showing to the person who typed the input
    pub fn user_hint(&self) -> String {
        match self {
            LensError::LocationNotFound { place } => format!(
                "Could not find location: {}. Try a more specific name, e.g. add the city or country.",
                place
            ),
            LensError::InvalidInput(msg) => format!("Please check your input: {}", msg),
            LensError::UnknownUnit { .. } => {
                "Internal error while calculating emissions.".to_string()
            }
        }
    }
}

/// Failure of the optional advice provider.
///
/// Never leaves the crate: the recommendation engine absorbs it into the
/// rule-based fallback.
#[derive(Debug, Error)]
pub(crate) enum ProviderFailure {
    #[error("advice provider timed out after {0:?}")]
    Timeout(Duration),

    #[error("advice provider request failed: {0:#}")]
    Request(anyhow::Error),

    #[error("advice provider returned no usable advice")]
    Malformed,
}

pub type LensResult<T> = std::result::Result<T, LensError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_not_found_carries_input() {
        let err = LensError::not_found("Karunya Univ");
        assert_eq!(err.to_string(), "could not find location: Karunya Univ");
        assert!(err.user_hint().contains("more specific"));
    }

    #[test]
    fn test_unknown_unit_display() {
        let err = LensError::UnknownUnit { table: "vehicle", key: "Hovercraft".into() };
        assert_eq!(err.to_string(), "unknown unit 'Hovercraft' in vehicle factor table");
    }
}
