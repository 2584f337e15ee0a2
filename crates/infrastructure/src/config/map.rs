//! Map view, default selection and destination catalog settings.

use domain::{
    DEFAULT_DESTINATION, DEFAULT_ZOOM, DestinationCatalog, DestinationRecord, DomainError,
    SelectionState, value_objects::GeoLocation,
};
use serde::{Deserialize, Serialize};

use super::default_true;

/// Initial map view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Latitude of the initial center (default: 54.5)
    #[serde(default = "default_center_latitude")]
    pub center_latitude: f64,

    /// Longitude of the initial center (default: -3.5)
    #[serde(default = "default_center_longitude")]
    pub center_longitude: f64,

    /// Initial zoom level (default: 6)
    #[serde(default = "default_zoom")]
    pub zoom: u8,
}

const fn default_center_latitude() -> f64 {
    54.5
}

const fn default_center_longitude() -> f64 {
    -3.5
}

const fn default_zoom() -> u8 {
    DEFAULT_ZOOM
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_latitude: default_center_latitude(),
            center_longitude: default_center_longitude(),
            zoom: default_zoom(),
        }
    }
}

impl MapConfig {
    /// The configured center as a validated location
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if the center is out of range.
    pub fn center(&self) -> Result<GeoLocation, DomainError> {
        GeoLocation::new(self.center_latitude, self.center_longitude).map_err(|_| {
            DomainError::InvalidCoordinates {
                latitude: self.center_latitude,
                longitude: self.center_longitude,
            }
        })
    }
}

/// Selection a new session starts with
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Show train journeys (default: true)
    #[serde(default = "default_true")]
    pub show_train: bool,

    /// Show driving routes (default: true)
    #[serde(default = "default_true")]
    pub show_car: bool,

    /// Preselected destinations (default: Saint Pancras, London)
    #[serde(default = "default_destinations")]
    pub destinations: Vec<String>,
}

fn default_destinations() -> Vec<String> {
    vec![DEFAULT_DESTINATION.to_string()]
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            show_train: true,
            show_car: true,
            destinations: default_destinations(),
        }
    }
}

impl SelectionConfig {
    /// Build the initial selection
    #[must_use]
    pub fn to_selection(&self) -> SelectionState {
        SelectionState::new(self.show_train, self.show_car, self.destinations.clone())
    }
}

/// One entry of a configured destination catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationConfig {
    /// Display name, unique within the catalog
    pub name: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Postal code; whitespace is stripped
    pub postal_code: String,
}

/// Build the catalog from configured entries, or the built-in termini when
/// none are configured
///
/// # Errors
///
/// Returns a `DomainError` for an invalid entry or a duplicate name.
pub fn build_catalog(
    entries: Option<&[DestinationConfig]>,
) -> Result<DestinationCatalog, DomainError> {
    let Some(entries) = entries.filter(|e| !e.is_empty()) else {
        return Ok(DestinationCatalog::default());
    };

    let records = entries
        .iter()
        .map(|e| DestinationRecord::new(&e.name, e.latitude, e.longitude, &e.postal_code))
        .collect::<Result<Vec<_>, _>>()?;

    DestinationCatalog::new(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_defaults_center_on_great_britain() {
        let map = MapConfig::default();
        assert_eq!(map.center().unwrap(), GeoLocation::uk_center());
        assert_eq!(map.zoom, 6);
    }

    #[test]
    fn map_center_out_of_range() {
        let map = MapConfig {
            center_latitude: 95.0,
            ..Default::default()
        };
        assert!(matches!(
            map.center(),
            Err(DomainError::InvalidCoordinates { .. })
        ));
    }

    #[test]
    fn selection_defaults() {
        let selection = SelectionConfig::default().to_selection();
        assert_eq!(selection, SelectionState::default());
    }

    #[test]
    fn empty_catalog_config_uses_builtin_termini() {
        let catalog = build_catalog(Some(&[])).unwrap();
        assert!(catalog.contains(DEFAULT_DESTINATION));

        let catalog = build_catalog(None).unwrap();
        assert_eq!(catalog, DestinationCatalog::default());
    }

    #[test]
    fn configured_catalog_replaces_builtin() {
        let entries = vec![DestinationConfig {
            name: "York".to_string(),
            latitude: 53.958,
            longitude: -1.093,
            postal_code: "yo24 1ab".to_string(),
        }];

        let catalog = build_catalog(Some(&entries)).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("York").unwrap().postal_code().as_str(), "YO241AB");
        assert!(!catalog.contains(DEFAULT_DESTINATION));
    }

    #[test]
    fn configured_catalog_rejects_duplicates() {
        let entry = DestinationConfig {
            name: "York".to_string(),
            latitude: 53.958,
            longitude: -1.093,
            postal_code: "YO24 1AB".to_string(),
        };

        let result = build_catalog(Some(&[entry.clone(), entry]));
        assert!(matches!(result, Err(DomainError::DuplicateDestination(_))));
    }
}
