//! OSRM driving route integration
//!
//! Client for the OSRM route service (<https://project-osrm.org>).
//! Provides the road distance between two coordinates without requiring an API key.

mod client;
mod models;

pub use client::{OsrmClient, OsrmConfig, RoutingClient, RoutingError};
pub use models::RouteSummary;
