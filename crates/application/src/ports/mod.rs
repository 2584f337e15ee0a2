//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod driving_distance_port;
mod geocoding_port;
mod secret_store;
mod train_journey_port;

#[cfg(test)]
pub use driving_distance_port::MockDrivingDistancePort;
pub use driving_distance_port::DrivingDistancePort;
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use geocoding_port::GeocodingPort;
pub use secret_store::{SecretStoreExt, SecretStorePort};
#[cfg(test)]
pub use train_journey_port::MockTrainJourneyPort;
pub use train_journey_port::TrainJourneyPort;
