//! Public transport integration for the commute map
//!
//! Provides rail journey planning via the [TfL Unified API](https://api.tfl.gov.uk)
//! and reverse geocoding (coordinate to postal code) via
//! [Nominatim/OpenStreetMap](https://nominatim.openstreetmap.org).
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern consistent with the other integration crates.
//! [`JourneyPlannerClient`] defines the interface for journey planning, implemented by
//! [`TflJourneyClient`]. [`GeocodingClient`] handles coordinate-to-postal-code conversion
//! via [`NominatimGeocodingClient`].
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_transit::{JourneyPlannerConfig, JourneyPlannerCredentials, TflJourneyClient};
//!
//! let config = JourneyPlannerConfig::default();
//! let client = TflJourneyClient::new(&config, JourneyPlannerCredentials::new(id, key))?;
//!
//! let summary = client.plan_journey(&origin_postcode, &destination_postcode).await?;
//! ```

mod client;
mod config;
mod error;
mod geocoding;
mod models;

pub use client::{JourneyPlannerClient, TflJourneyClient};
pub use config::{JourneyPlannerConfig, JourneyPlannerCredentials};
pub use error::TransitError;
pub use geocoding::{GeocodingClient, GeocodingError, NominatimConfig, NominatimGeocodingClient};
pub use models::JourneySummary;
