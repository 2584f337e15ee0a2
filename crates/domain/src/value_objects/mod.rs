//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod journey_metrics;
mod postal_code;
mod transport_mode;

pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use journey_metrics::{TrainJourney, car_label, round_km};
pub use postal_code::PostalCode;
pub use transport_mode::TransportMode;
