//! User selection: which transport modes to show and which destinations

use serde::{Deserialize, Serialize};

use super::destination::{DEFAULT_DESTINATION, DestinationCatalog};
use crate::errors::DomainError;
use crate::value_objects::TransportMode;

/// Toggles and destination choices controlled by the user
///
/// Deserialization goes through [`SelectionState::new`], so repeated names
/// are dropped however the selection arrives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SelectionRepr")]
pub struct SelectionState {
    /// Draw train journeys
    pub show_train: bool,
    /// Draw driving routes
    pub show_car: bool,
    /// Chosen destination names, in the order they were picked
    destinations: Vec<String>,
}

#[derive(Deserialize)]
struct SelectionRepr {
    show_train: bool,
    show_car: bool,
    #[serde(default)]
    destinations: Vec<String>,
}

impl From<SelectionRepr> for SelectionState {
    fn from(repr: SelectionRepr) -> Self {
        Self::new(repr.show_train, repr.show_car, repr.destinations)
    }
}

impl SelectionState {
    /// Create a selection; repeated destination names are dropped
    #[must_use]
    pub fn new(show_train: bool, show_car: bool, destinations: Vec<String>) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(destinations.len());
        for name in destinations {
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        Self {
            show_train,
            show_car,
            destinations: unique,
        }
    }

    /// Chosen destination names
    #[must_use]
    pub fn destinations(&self) -> &[String] {
        &self.destinations
    }

    /// Whether any destination is chosen
    #[must_use]
    pub fn has_destinations(&self) -> bool {
        !self.destinations.is_empty()
    }

    /// Whether routes of the given mode should be drawn
    #[must_use]
    pub const fn is_enabled(&self, mode: TransportMode) -> bool {
        match mode {
            TransportMode::Car => self.show_car,
            TransportMode::Train => self.show_train,
        }
    }

    /// Check every chosen destination exists in the catalog
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownDestination` for the first unknown name.
    pub fn validate_against(&self, catalog: &DestinationCatalog) -> Result<(), DomainError> {
        match self.destinations.iter().find(|n| !catalog.contains(n)) {
            Some(unknown) => Err(DomainError::UnknownDestination(unknown.clone())),
            None => Ok(()),
        }
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(true, true, vec![DEFAULT_DESTINATION.to_string()])
    }
}
