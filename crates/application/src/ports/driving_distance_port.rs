//! Driving distance port

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;

/// Port for road distances between two points
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DrivingDistancePort: Send + Sync {
    /// Driving distance in kilometers, rounded to two decimals
    ///
    /// Returns `None` when no distance could be obtained; the car route for
    /// that destination is then simply not drawn.
    async fn driving_distance_km(&self, from: &GeoLocation, to: &GeoLocation) -> Option<f64>;
}
