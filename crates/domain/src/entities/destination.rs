//! Destination catalog
//!
//! Static reference data loaded once at startup: the destinations a user
//! can pick, each with its coordinates and postal code. Keeping both in a
//! single record means a name can never have coordinates without a postal
//! code or vice versa.

use std::collections::HashSet;

use serde::Serialize;

use crate::errors::DomainError;
use crate::value_objects::{GeoLocation, PostalCode};

/// Name of the destination preselected for a new session
pub const DEFAULT_DESTINATION: &str = "Saint Pancras, London";

/// A destination the user can select
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DestinationRecord {
    /// Unique, human-readable name
    name: String,
    /// Where the destination marker is drawn
    location: GeoLocation,
    /// Postal code passed to the journey planner
    postal_code: PostalCode,
}

impl DestinationRecord {
    /// Create a destination record with validated coordinates and postal code
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank, the coordinates are out of
    /// range, or the postal code is empty.
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        postal_code: &str,
    ) -> Result<Self, DomainError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::ValidationError(
                "Destination name must not be empty".to_string(),
            ));
        }

        let location = GeoLocation::new(latitude, longitude)
            .map_err(|_| DomainError::InvalidCoordinates {
                latitude,
                longitude,
            })?;

        Ok(Self {
            name,
            location,
            postal_code: PostalCode::new(postal_code)?,
        })
    }

    /// Get the destination name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the destination coordinates
    #[must_use]
    pub const fn location(&self) -> GeoLocation {
        self.location
    }

    /// Get the destination postal code
    #[must_use]
    pub const fn postal_code(&self) -> &PostalCode {
        &self.postal_code
    }
}

/// Ordered, immutable set of destinations keyed by name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DestinationCatalog {
    records: Vec<DestinationRecord>,
}

impl DestinationCatalog {
    /// Build a catalog, rejecting duplicate names
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateDestination` if two records share a name.
    pub fn new(records: Vec<DestinationRecord>) -> Result<Self, DomainError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.name.as_str()) {
                return Err(DomainError::DuplicateDestination(record.name.clone()));
            }
        }
        Ok(Self { records })
    }

    /// Look up a destination by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DestinationRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Whether a destination with this name exists
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate over all destinations in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &DestinationRecord> {
        self.records.iter()
    }

    /// All destination names in catalog order
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name.as_str()).collect()
    }

    /// Number of destinations
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Major UK rail termini
    #[must_use]
    pub fn uk_rail_termini() -> Self {
        let records = [
            (DEFAULT_DESTINATION, 51.5320, -0.1263, "N1C 4QP"),
            ("King's Cross, London", 51.5308, -0.1238, "N1 9AL"),
            ("Paddington, London", 51.5154, -0.1755, "W2 1HQ"),
            ("Waterloo, London", 51.5033, -0.1133, "SE1 8SW"),
            ("Liverpool Street, London", 51.5178, -0.0823, "EC2M 7PY"),
            ("Manchester Piccadilly", 53.4774, -2.2309, "M1 2BN"),
            ("Birmingham New Street", 52.4778, -1.8990, "B2 4QA"),
            ("Edinburgh Waverley", 55.9521, -3.1899, "EH1 1BB"),
        ]
        .into_iter()
        .map(|(name, lat, lon, postcode)| DestinationRecord {
            name: name.to_string(),
            location: GeoLocation::new_unchecked(lat, lon),
            postal_code: PostalCode::new_unchecked(&postcode.replace(' ', "")),
        })
        .collect();

        Self { records }
    }
}

impl Default for DestinationCatalog {
    fn default() -> Self {
        Self::uk_rail_termini()
    }
}

impl<'a> IntoIterator for &'a DestinationCatalog {
    type Item = &'a DestinationRecord;
    type IntoIter = std::slice::Iter<'a, DestinationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> DestinationRecord {
        DestinationRecord::new(name, 51.5, -0.12, "N1 9AL").unwrap()
    }

    #[test]
    fn default_catalog_contains_default_destination() {
        let catalog = DestinationCatalog::default();
        let pancras = catalog.get(DEFAULT_DESTINATION).unwrap();
        assert_eq!(pancras.postal_code().as_str(), "N1C4QP");
    }

    #[test]
    fn default_catalog_postal_codes_are_compact() {
        for record in &DestinationCatalog::default() {
            assert!(!record.postal_code().as_str().contains(' '));
        }
    }

    #[test]
    fn default_catalog_names_are_unique() {
        let catalog = DestinationCatalog::default();
        assert!(DestinationCatalog::new(catalog.iter().cloned().collect()).is_ok());
    }

    #[test]
    fn duplicate_names_rejected() {
        let result = DestinationCatalog::new(vec![record("A"), record("B"), record("A")]);
        assert!(matches!(result, Err(DomainError::DuplicateDestination(n)) if n == "A"));
    }

    #[test]
    fn record_trims_name_and_compacts_postcode() {
        let r = DestinationRecord::new("  Leeds  ", 53.7949, -1.5474, "LS1 4DY").unwrap();
        assert_eq!(r.name(), "Leeds");
        assert_eq!(r.postal_code().as_str(), "LS14DY");
    }

    #[test]
    fn record_rejects_blank_name() {
        assert!(DestinationRecord::new("  ", 51.0, 0.0, "N1 9AL").is_err());
    }

    #[test]
    fn record_rejects_bad_coordinates() {
        assert!(matches!(
            DestinationRecord::new("Nowhere", 120.0, 0.0, "N1 9AL"),
            Err(DomainError::InvalidCoordinates { .. })
        ));
    }

    #[test]
    fn lookup_and_names_keep_order() {
        let catalog = DestinationCatalog::new(vec![record("B"), record("A")]).unwrap();
        assert_eq!(catalog.names(), vec!["B", "A"]);
        assert!(catalog.contains("A"));
        assert!(!catalog.contains("C"));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn empty_catalog_is_allowed() {
        let catalog = DestinationCatalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
    }
}
