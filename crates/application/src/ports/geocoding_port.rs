//! Reverse geocoding port
//!
//! Maps a clicked coordinate to the postal code of the address there.

use async_trait::async_trait;
use domain::value_objects::{GeoLocation, PostalCode};
#[cfg(test)]
use mockall::automock;

/// Port for reverse geocoding
///
/// Implementations never fail: any upstream problem (non-200 status,
/// network error, missing postcode field) yields `None`, which the caller
/// treats as "cannot compute journeys from here".
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve the postal code at a location
    async fn postal_code(&self, location: &GeoLocation) -> Option<PostalCode>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn GeocodingPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn GeocodingPort>();
    }
}
