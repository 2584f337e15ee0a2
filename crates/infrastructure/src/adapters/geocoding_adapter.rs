//! Geocoding adapter - Implements GeocodingPort using Nominatim

use application::{error::ApplicationError, ports::GeocodingPort};
use async_trait::async_trait;
use domain::value_objects::{GeoLocation, PostalCode};
use integration_transit::{GeocodingClient, NominatimConfig, NominatimGeocodingClient};
use tracing::{debug, instrument, warn};

/// Adapter resolving postal codes through Nominatim reverse geocoding
pub struct GeocodingAdapter {
    client: NominatimGeocodingClient,
}

impl std::fmt::Debug for GeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingAdapter")
            .field("client", &"NominatimGeocodingClient")
            .finish()
    }
}

impl GeocodingAdapter {
    /// Wrap an existing client
    pub const fn new(client: NominatimGeocodingClient) -> Self {
        Self { client }
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn with_config(config: &NominatimConfig) -> Result<Self, ApplicationError> {
        config.validate().map_err(ApplicationError::Configuration)?;
        let client = NominatimGeocodingClient::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn postal_code(&self, location: &GeoLocation) -> Option<PostalCode> {
        match self
            .client
            .reverse_postal_code(location.latitude(), location.longitude())
            .await
        {
            Ok(code) => {
                debug!(postal_code = %code, "Resolved postal code");
                Some(code)
            },
            Err(e) => {
                warn!(error = %e, "Reverse geocoding failed");
                None
            },
        }
    }
}
