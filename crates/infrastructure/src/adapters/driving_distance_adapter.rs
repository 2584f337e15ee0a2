//! Driving distance adapter - Implements DrivingDistancePort using OSRM

use application::{error::ApplicationError, ports::DrivingDistancePort};
use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use integration_routing::{OsrmClient, OsrmConfig, RoutingClient};
use tracing::{debug, instrument, warn};

/// Adapter for road distances using the OSRM route service
pub struct DrivingDistanceAdapter {
    client: OsrmClient,
}

impl std::fmt::Debug for DrivingDistanceAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrivingDistanceAdapter")
            .field("client", &"OsrmClient")
            .finish()
    }
}

impl DrivingDistanceAdapter {
    /// Wrap an existing client
    pub const fn new(client: OsrmClient) -> Self {
        Self { client }
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn with_config(config: OsrmConfig) -> Result<Self, ApplicationError> {
        config.validate().map_err(ApplicationError::Configuration)?;
        let client =
            OsrmClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl DrivingDistancePort for DrivingDistanceAdapter {
    #[instrument(skip(self), fields(from = %from, to = %to))]
    async fn driving_distance_km(&self, from: &GeoLocation, to: &GeoLocation) -> Option<f64> {
        match self.client.route(from, to).await {
            Ok(summary) => {
                let km = summary.distance_km();
                debug!(distance_km = km, "Driving distance");
                Some(km)
            },
            Err(e) => {
                warn!(error = %e, "Driving route lookup failed");
                None
            },
        }
    }
}
