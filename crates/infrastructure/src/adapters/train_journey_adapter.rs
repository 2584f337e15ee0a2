//! Train journey adapter - Implements TrainJourneyPort using the TfL planner

use application::{error::ApplicationError, ports::TrainJourneyPort};
use async_trait::async_trait;
use domain::value_objects::{PostalCode, TrainJourney};
use integration_transit::{
    JourneyPlannerClient, JourneyPlannerConfig, JourneyPlannerCredentials, JourneySummary,
    TflJourneyClient,
};
use tracing::{debug, instrument, warn};

/// Adapter for rail journeys using the TfL journey planner
pub struct TrainJourneyAdapter {
    client: TflJourneyClient,
}

impl std::fmt::Debug for TrainJourneyAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrainJourneyAdapter")
            .field("client", &"TflJourneyClient")
            .finish()
    }
}

impl TrainJourneyAdapter {
    /// Wrap an existing client
    pub const fn new(client: TflJourneyClient) -> Self {
        Self { client }
    }

    /// Create with custom configuration and resolved credentials
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn with_config(
        config: &JourneyPlannerConfig,
        credentials: JourneyPlannerCredentials,
    ) -> Result<Self, ApplicationError> {
        let client = TflJourneyClient::new(config, credentials)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(client))
    }

    const fn map_summary(summary: JourneySummary) -> TrainJourney {
        TrainJourney::new(summary.duration_minutes, summary.fare_pence)
    }
}

#[async_trait]
impl TrainJourneyPort for TrainJourneyAdapter {
    #[instrument(skip(self), fields(from = %from, to = %to))]
    async fn train_journey(&self, from: &PostalCode, to: &PostalCode) -> TrainJourney {
        match self.client.plan_journey(from, to).await {
            Ok(summary) => {
                debug!(
                    duration_minutes = ?summary.duration_minutes,
                    fare_pence = ?summary.fare_pence,
                    "Train journey planned"
                );
                Self::map_summary(summary)
            },
            Err(e) => {
                warn!(error = %e, "Train journey lookup failed");
                TrainJourney::absent()
            },
        }
    }
}
