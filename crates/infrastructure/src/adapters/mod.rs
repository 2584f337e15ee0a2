//! Adapters implementing the application ports

mod driving_distance_adapter;
mod env_secret_store;
mod geocoding_adapter;
mod train_journey_adapter;

pub use driving_distance_adapter::DrivingDistanceAdapter;
pub use env_secret_store::EnvSecretStore;
pub use geocoding_adapter::GeocodingAdapter;
pub use train_journey_adapter::TrainJourneyAdapter;
