//! Journey planner data models
//!
//! Typed views of the TfL `JourneyResults` response. Only the fields the
//! map needs are modelled; everything else in the payload is ignored.

use serde::{Deserialize, Serialize};

/// Duration and fare of the first journey the planner proposed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneySummary {
    /// Journey duration in minutes
    pub duration_minutes: Option<u32>,
    /// Total fare in pence
    pub fare_pence: Option<u32>,
}

/// Raw `JourneyResults` response
#[derive(Debug, Deserialize)]
pub(crate) struct RawJourneyResults {
    #[serde(default)]
    pub journeys: Vec<RawJourney>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawJourney {
    pub duration: Option<u32>,
    pub fare: Option<RawFare>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawFare {
    pub total_cost: Option<u32>,
}

impl From<&RawJourney> for JourneySummary {
    fn from(raw: &RawJourney) -> Self {
        Self {
            duration_minutes: raw.duration,
            fare_pence: raw.fare.as_ref().and_then(|f| f.total_cost),
        }
    }
}
