//! OSRM response models

use serde::{Deserialize, Serialize};

/// Raw `route` service response
#[derive(Debug, Deserialize)]
pub(crate) struct RouteResponse {
    pub code: Option<String>,
    #[serde(default)]
    pub routes: Vec<RawRoute>,
}

/// A single route; only the summary fields are requested
#[derive(Debug, Deserialize)]
pub(crate) struct RawRoute {
    pub distance: f64,
    pub duration: Option<f64>,
}

/// Summary of a driving route
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    /// Route length in meters
    pub distance_meters: f64,
    /// Expected travel time in seconds, when reported
    pub duration_seconds: Option<f64>,
}

impl RouteSummary {
    /// Route length in kilometers, rounded to two decimals
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        domain::value_objects::round_km(self.distance_meters)
    }
}

impl From<RawRoute> for RouteSummary {
    fn from(raw: RawRoute) -> Self {
        Self {
            distance_meters: raw.distance,
            duration_seconds: raw.duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_km_rounds() {
        let summary = RouteSummary {
            distance_meters: 500.0,
            duration_seconds: None,
        };
        assert!((summary.distance_km() - 0.5).abs() < f64::EPSILON);

        let summary = RouteSummary {
            distance_meters: 308_456.7,
            duration_seconds: Some(12_000.0),
        };
        assert!((summary.distance_km() - 308.46).abs() < 1e-9);
    }

    #[test]
    fn test_routes_default_to_empty() {
        let response: RouteResponse = serde_json::from_str(r#"{"code": "InvalidQuery"}"#).unwrap();
        assert!(response.routes.is_empty());
        assert_eq!(response.code.as_deref(), Some("InvalidQuery"));
    }
}
