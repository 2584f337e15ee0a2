//! TfL journey planner client
//!
//! Queries the [TfL Unified API](https://api.tfl.gov.uk) `JourneyResults`
//! endpoint for a rail journey between two postal codes and reports the
//! duration and total fare of the first proposed journey.

use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::PostalCode;
use reqwest::Client;
use secrecy::ExposeSecret;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::{JourneyPlannerConfig, JourneyPlannerCredentials};
use crate::error::TransitError;
use crate::models::{JourneySummary, RawJourneyResults};

/// Trait for journey planner clients
#[async_trait]
pub trait JourneyPlannerClient: Send + Sync {
    /// Plan a journey between two postal codes
    async fn plan_journey(
        &self,
        from: &PostalCode,
        to: &PostalCode,
    ) -> Result<JourneySummary, TransitError>;
}

/// Journey planner client backed by the TfL Unified API
#[derive(Debug)]
pub struct TflJourneyClient {
    client: Client,
    config: JourneyPlannerConfig,
    credentials: JourneyPlannerCredentials,
}

impl TflJourneyClient {
    /// Create a new TfL journey planner client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(
        config: &JourneyPlannerConfig,
        credentials: JourneyPlannerCredentials,
    ) -> Result<Self, TransitError> {
        config.validate().map_err(TransitError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("commute-map/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransitError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
            credentials,
        })
    }

    /// Build `{base}/Journey/JourneyResults/{from}/to/{to}`
    fn journey_url(&self, from: &PostalCode, to: &PostalCode) -> Result<Url, TransitError> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| TransitError::ConfigurationError(format!("Invalid base_url: {e}")))?;

        url.path_segments_mut()
            .map_err(|()| {
                TransitError::ConfigurationError("base_url cannot be a base".to_string())
            })?
            .pop_if_empty()
            .extend(["Journey", "JourneyResults", from.as_str(), "to", to.as_str()]);

        Ok(url)
    }

    /// Parse the raw journey response, keeping the first journey only
    fn parse_journey_response(
        body: &str,
        from: &PostalCode,
        to: &PostalCode,
    ) -> Result<JourneySummary, TransitError> {
        let raw: RawJourneyResults =
            serde_json::from_str(body).map_err(|e| TransitError::ParseError(e.to_string()))?;

        raw.journeys
            .first()
            .map(JourneySummary::from)
            .ok_or_else(|| TransitError::NoJourneysFound {
                from: from.to_string(),
                to: to.to_string(),
            })
    }
}

#[async_trait]
impl JourneyPlannerClient for TflJourneyClient {
    #[instrument(skip(self), fields(from = %from, to = %to))]
    async fn plan_journey(
        &self,
        from: &PostalCode,
        to: &PostalCode,
    ) -> Result<JourneySummary, TransitError> {
        let url = self.journey_url(from, to)?;

        let params = [
            ("app_id", self.credentials.app_id.expose_secret()),
            ("app_key", self.credentials.app_key.expose_secret()),
            ("mode", self.config.mode.as_str()),
        ];

        debug!(path = %url.path(), mode = %self.config.mode, "Planning journey");

        let response = self
            .client
            .get(url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransitError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    TransitError::ConnectionFailed(e.without_url().to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TransitError::RateLimitExceeded {
                retry_after_secs: response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok()),
            });
        }

        if status != reqwest::StatusCode::OK {
            warn!(%status, "Journey planner returned non-OK status");
            return Err(TransitError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| TransitError::ParseError(e.without_url().to_string()))?;

        let summary = Self::parse_journey_response(&body, from, to)?;
        debug!(
            duration_minutes = ?summary.duration_minutes,
            fare_pence = ?summary.fare_pence,
            "Journey planned"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(raw: &str) -> PostalCode {
        PostalCode::new(raw).unwrap()
    }

    fn client_with_base(base_url: &str) -> TflJourneyClient {
        let config = JourneyPlannerConfig {
            base_url: base_url.to_string(),
            ..JourneyPlannerConfig::for_testing()
        };
        TflJourneyClient::new(&config, JourneyPlannerCredentials::new("id", "key")).unwrap()
    }

    #[test]
    fn test_journey_url_embeds_postal_codes() {
        let client = client_with_base("https://api.tfl.gov.uk");
        let url = client.journey_url(&code("N1C 4QP"), &code("SE1 8SW")).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.tfl.gov.uk/Journey/JourneyResults/N1C4QP/to/SE18SW"
        );
    }

    #[test]
    fn test_journey_url_with_trailing_slash() {
        let client = client_with_base("https://api.tfl.gov.uk/");
        let url = client.journey_url(&code("W21HQ"), &code("M12BN")).unwrap();
        assert_eq!(url.path(), "/Journey/JourneyResults/W21HQ/to/M12BN");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = JourneyPlannerConfig {
            timeout_secs: 0,
            ..JourneyPlannerConfig::default()
        };
        let result = TflJourneyClient::new(&config, JourneyPlannerCredentials::new("a", "b"));
        assert!(matches!(result, Err(TransitError::ConfigurationError(_))));
    }

    #[test]
    fn test_parse_takes_first_journey() {
        let body = r#"{"journeys": [
            {"duration": 45, "fare": {"totalCost": 350}},
            {"duration": 60, "fare": {"totalCost": 200}}
        ]}"#;
        let summary =
            TflJourneyClient::parse_journey_response(body, &code("A1"), &code("B2")).unwrap();
        assert_eq!(summary.duration_minutes, Some(45));
        assert_eq!(summary.fare_pence, Some(350));
    }

    #[test]
    fn test_parse_empty_journeys() {
        let result =
            TflJourneyClient::parse_journey_response(r#"{"journeys": []}"#, &code("A1"), &code("B2"));
        assert!(matches!(result, Err(TransitError::NoJourneysFound { .. })));
    }

    #[test]
    fn test_parse_malformed_body() {
        let result = TflJourneyClient::parse_journey_response("<html>", &code("A1"), &code("B2"));
        assert!(matches!(result, Err(TransitError::ParseError(_))));
    }
}
