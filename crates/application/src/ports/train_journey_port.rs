//! Train journey port
//!
//! Looks up the duration and fare of a rail journey between two postal
//! codes.

use async_trait::async_trait;
use domain::value_objects::{PostalCode, TrainJourney};
#[cfg(test)]
use mockall::automock;

/// Port for rail journey lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TrainJourneyPort: Send + Sync {
    /// Plan a rail journey
    ///
    /// Failures yield [`TrainJourney::absent`]; a journey without a fare
    /// keeps its duration and leaves the fare unset.
    async fn train_journey(&self, from: &PostalCode, to: &PostalCode) -> TrainJourney;
}
