//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Coordinates outside the valid latitude/longitude range
    #[error("Invalid coordinates: ({latitude}, {longitude})")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    /// Postal code that is empty once whitespace is removed
    #[error("Invalid postal code: {0:?}")]
    InvalidPostalCode(String),

    /// Destination name not present in the catalog
    #[error("Unknown destination: {0}")]
    UnknownDestination(String),

    /// Destination name listed more than once in the catalog
    #[error("Duplicate destination: {0}")]
    DuplicateDestination(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
