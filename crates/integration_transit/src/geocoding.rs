//! Nominatim reverse geocoding client
//!
//! Resolves a coordinate to the postal code of the nearest address using
//! the [Nominatim](https://nominatim.openstreetmap.org) API (OpenStreetMap).
//! Every request identifies the application via its `User-Agent`, as the
//! Nominatim usage policy requires.

use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::PostalCode;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

/// Configuration for the Nominatim geocoding service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NominatimConfig {
    /// Base URL for the Nominatim API
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_geocoding_timeout_secs")]
    pub timeout_secs: u64,

    /// Client identifier sent as `User-Agent`
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_geocoding_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

const fn default_geocoding_timeout_secs() -> u64 {
    5
}

fn default_user_agent() -> String {
    format!(
        "commute-map/{} (https://github.com/twohreichel/commute-map)",
        env!("CARGO_PKG_VERSION")
    )
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            timeout_secs: default_geocoding_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl NominatimConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 2,
            user_agent: "commute-map-tests/1.0".to_string(),
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("geocoding base_url must not be empty".to_string());
        }
        if let Err(e) = Url::parse(&self.base_url) {
            return Err(format!("geocoding base_url is invalid: {e}"));
        }
        if self.timeout_secs == 0 {
            return Err("geocoding timeout_secs must be greater than 0".to_string());
        }
        if self.user_agent.trim().is_empty() {
            return Err("geocoding user_agent must identify the application".to_string());
        }
        Ok(())
    }
}

/// Errors that can occur during geocoding
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Connection to geocoding service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// Geocoding service answered with a non-success status
    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse geocoding response
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// The address at the coordinate has no postal code
    #[error("No postal code at {0}")]
    PostalCodeNotFound(String),

    /// Request timeout
    #[error("Geocoding request timed out")]
    Timeout,

    /// The configured base URL is unusable
    #[error("Geocoding configuration error: {0}")]
    ConfigurationError(String),
}

/// Trait for reverse geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Find the postal code of the address nearest to a coordinate
    async fn reverse_postal_code(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<PostalCode, GeocodingError>;
}

/// Nominatim-based reverse geocoding client
#[derive(Debug)]
pub struct NominatimGeocodingClient {
    client: Client,
    config: NominatimConfig,
}

impl NominatimGeocodingClient {
    /// Create a new Nominatim geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &NominatimConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Build `{base}/reverse`, tolerating a trailing slash on the base
    fn reverse_url(&self) -> Result<Url, GeocodingError> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| GeocodingError::ConfigurationError(format!("Invalid base_url: {e}")))?;

        url.path_segments_mut()
            .map_err(|()| {
                GeocodingError::ConfigurationError("base_url cannot be a base".to_string())
            })?
            .pop_if_empty()
            .push("reverse");

        Ok(url)
    }

    /// Extract the compact postal code from a raw response
    fn extract_postal_code(
        result: ReverseResult,
        latitude: f64,
        longitude: f64,
    ) -> Result<PostalCode, GeocodingError> {
        result
            .address
            .and_then(|address| address.postcode)
            .and_then(|raw| PostalCode::new(raw).ok())
            .ok_or_else(|| GeocodingError::PostalCodeNotFound(format!("{latitude},{longitude}")))
    }
}

#[async_trait]
impl GeocodingClient for NominatimGeocodingClient {
    #[instrument(skip(self))]
    async fn reverse_postal_code(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<PostalCode, GeocodingError> {
        let url = self.reverse_url()?;
        let params = [
            ("lat", latitude.to_string()),
            ("lon", longitude.to_string()),
            ("format", "json".to_string()),
            ("addressdetails", "1".to_string()),
        ];

        debug!(%latitude, %longitude, "Reverse geocoding");

        let response = self
            .client
            .get(url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout
                } else {
                    GeocodingError::ConnectionFailed(e.to_string())
                }
            })?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(GeocodingError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let result: ReverseResult = response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let postal_code = Self::extract_postal_code(result, latitude, longitude)?;
        debug!(%postal_code, "Resolved postal code");
        Ok(postal_code)
    }
}

/// Raw Nominatim reverse response
#[derive(Debug, Deserialize)]
struct ReverseResult {
    address: Option<RawAddress>,
}

/// Address block of a Nominatim response (only the fields we read)
#[derive(Debug, Deserialize)]
struct RawAddress {
    postcode: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nominatim_config_default() {
        let config = NominatimConfig::default();
        assert_eq!(config.base_url, "https://nominatim.openstreetmap.org");
        assert_eq!(config.timeout_secs, 5);
        assert!(config.user_agent.starts_with("commute-map/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_nominatim_config_for_testing() {
        let config = NominatimConfig::for_testing();
        assert_eq!(config.timeout_secs, 2);
        assert_eq!(config.user_agent, "commute-map-tests/1.0");
    }

    #[test]
    fn test_validation_rejects_blank_user_agent() {
        let config = NominatimConfig {
            user_agent: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_unparseable_base_url() {
        let config = NominatimConfig {
            base_url: "nominatim.local".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let config = NominatimConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_geocoding_error_display() {
        let err = GeocodingError::PostalCodeNotFound("51.5,-0.12".to_string());
        assert!(err.to_string().contains("51.5,-0.12"));

        let err = GeocodingError::Timeout;
        assert!(err.to_string().contains("timed out"));
    }

    fn client_with_base(base_url: &str) -> NominatimGeocodingClient {
        let config = NominatimConfig {
            base_url: base_url.to_string(),
            ..NominatimConfig::for_testing()
        };
        NominatimGeocodingClient::new(&config).unwrap()
    }

    #[test]
    fn test_reverse_url() {
        let url = client_with_base("https://nominatim.openstreetmap.org").reverse_url().unwrap();
        assert_eq!(url.as_str(), "https://nominatim.openstreetmap.org/reverse");
    }

    #[test]
    fn test_reverse_url_with_trailing_slash() {
        let url = client_with_base("http://localhost:8080/").reverse_url().unwrap();
        assert_eq!(url.path(), "/reverse");

        let url = client_with_base("http://localhost:8080/nominatim/").reverse_url().unwrap();
        assert_eq!(url.path(), "/nominatim/reverse");
    }

    #[test]
    fn test_reverse_url_rejects_invalid_base() {
        assert!(matches!(
            client_with_base("not a url").reverse_url(),
            Err(GeocodingError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_extract_postal_code_strips_whitespace() {
        let json = r#"{"address": {"road": "Euston Road", "postcode": "N1C 4QP"}}"#;
        let result: ReverseResult = serde_json::from_str(json).unwrap();
        let code = NominatimGeocodingClient::extract_postal_code(result, 51.53, -0.12).unwrap();
        assert_eq!(code.as_str(), "N1C4QP");
    }

    #[test]
    fn test_extract_postal_code_missing_field() {
        let json = r#"{"address": {"road": "Somewhere"}}"#;
        let result: ReverseResult = serde_json::from_str(json).unwrap();
        assert!(matches!(
            NominatimGeocodingClient::extract_postal_code(result, 1.0, 2.0),
            Err(GeocodingError::PostalCodeNotFound(_))
        ));
    }

    #[test]
    fn test_extract_postal_code_unable_to_geocode() {
        let json = r#"{"error": "Unable to geocode"}"#;
        let result: ReverseResult = serde_json::from_str(json).unwrap();
        assert!(NominatimGeocodingClient::extract_postal_code(result, 0.0, 0.0).is_err());
    }
}
