//! OSRM driving route client
//!
//! HTTP client for the [OSRM](https://project-osrm.org) route service.
//! Only the route summary is requested (`overview=false`); the geometry of
//! the road path is never downloaded.

use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{RouteResponse, RouteSummary};

/// Routing client errors
#[derive(Debug, Error)]
pub enum RoutingError {
    /// Connection to the routing service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Routing service answered with a non-success status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from routing service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The response contained no route between the points
    #[error("No route found: {0}")]
    NoRouteFound(String),

    /// Request timeout
    #[error("Routing request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

/// Routing service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OsrmConfig {
    /// OSRM base URL (default: <https://router.project-osrm.org>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Routing profile (default: driving)
    #[serde(default = "default_profile")]
    pub profile: String,
}

fn default_base_url() -> String {
    "https://router.project-osrm.org".to_string()
}

const fn default_timeout() -> u64 {
    10
}

fn default_profile() -> String {
    "driving".to_string()
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            profile: default_profile(),
        }
    }
}

impl OsrmConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
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
            return Err("routing base_url must not be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("routing timeout_secs must be greater than 0".to_string());
        }
        if self.profile.trim().is_empty() {
            return Err("routing profile must not be empty".to_string());
        }
        Ok(())
    }
}

/// Routing client trait for driving distances
#[async_trait]
pub trait RoutingClient: Send + Sync {
    /// Get the summary of the best route between two points
    async fn route(
        &self,
        from: &GeoLocation,
        to: &GeoLocation,
    ) -> Result<RouteSummary, RoutingError>;
}

/// OSRM HTTP client implementation
#[derive(Debug)]
pub struct OsrmClient {
    client: Client,
    config: OsrmConfig,
}

impl OsrmClient {
    /// Create a new OSRM client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: OsrmConfig) -> Result<Self, RoutingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("commute-map/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RoutingError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, RoutingError> {
        Self::new(OsrmConfig::default())
    }

    /// Build `{base}/route/v1/{profile}/{lon},{lat};{lon},{lat}`
    fn route_url(&self, from: &GeoLocation, to: &GeoLocation) -> String {
        format!(
            "{}/route/v1/{}/{};{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.profile,
            from.to_lon_lat(),
            to.to_lon_lat()
        )
    }

    /// Parse the route response, keeping the first route
    fn parse_response(body: &str) -> Result<RouteSummary, RoutingError> {
        let response: RouteResponse =
            serde_json::from_str(body).map_err(|e| RoutingError::ParseError(e.to_string()))?;

        let code = response.code.clone();
        response
            .routes
            .into_iter()
            .next()
            .map(RouteSummary::from)
            .ok_or_else(|| RoutingError::NoRouteFound(code.unwrap_or_else(|| "empty".to_string())))
    }
}

#[async_trait]
impl RoutingClient for OsrmClient {
    #[instrument(skip(self), fields(from = %from, to = %to))]
    async fn route(
        &self,
        from: &GeoLocation,
        to: &GeoLocation,
    ) -> Result<RouteSummary, RoutingError> {
        let url = self.route_url(from, to);

        debug!(%url, "Requesting driving route");

        let response = self
            .client
            .get(&url)
            .query(&[("overview", "false")])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RoutingError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    RoutingError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(RoutingError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| RoutingError::ParseError(e.to_string()))?;

        let summary = Self::parse_response(&body)?;
        debug!(distance_m = summary.distance_meters, "Route found");
        Ok(summary)
    }
}
