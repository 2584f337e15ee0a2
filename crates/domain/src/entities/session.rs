//! Session state carried between map interactions

use serde::{Deserialize, Serialize};

use super::map_canvas::MapCanvas;
use super::selection::SelectionState;
use crate::errors::DomainError;
use crate::value_objects::{GeoLocation, PostalCode};

/// A click on the map surface, consumed once
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClickEvent {
    pub latitude: f64,
    pub longitude: f64,
}

impl ClickEvent {
    /// Create a click event
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Validate the clicked coordinates
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if the click lies outside
    /// the valid coordinate range.
    pub fn to_location(&self) -> Result<GeoLocation, DomainError> {
        GeoLocation::new(self.latitude, self.longitude).map_err(|_| {
            DomainError::InvalidCoordinates {
                latitude: self.latitude,
                longitude: self.longitude,
            }
        })
    }
}

impl From<GeoLocation> for ClickEvent {
    fn from(location: GeoLocation) -> Self {
        Self::new(location.latitude(), location.longitude())
    }
}

/// Where the user's journeys start, derived from the latest click
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OriginState {
    pub location: Option<GeoLocation>,
    pub postal_code: Option<PostalCode>,
}

impl OriginState {
    /// Origin at a clicked location whose postal code may be unknown
    #[must_use]
    pub const fn at(location: GeoLocation, postal_code: Option<PostalCode>) -> Self {
        Self {
            location: Some(location),
            postal_code,
        }
    }
}

/// Phase of the click-driven flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// No click yet; only the base map is shown
    AwaitingClick,
    /// A click has set the origin
    OriginSelected,
}

/// Explicit state of one interactive map session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub selection: SelectionState,
    pub origin: OriginState,
    /// Canvas produced by the most recent render
    #[serde(skip)]
    pub last_map: Option<MapCanvas>,
}

impl SessionState {
    /// Start a session with the given selection
    #[must_use]
    pub fn new(selection: SelectionState) -> Self {
        Self {
            selection,
            origin: OriginState::default(),
            last_map: None,
        }
    }

    /// Current phase, derived from the origin
    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        if self.origin.location.is_some() {
            SessionPhase::OriginSelected
        } else {
            SessionPhase::AwaitingClick
        }
    }
}
