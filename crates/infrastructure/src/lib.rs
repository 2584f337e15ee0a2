//! Infrastructure layer - Adapters for external systems
//!
//! Implements the ports defined in the application layer on top of the
//! integration clients, and owns configuration loading, secret lookup and
//! logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{
    AppConfig, DestinationConfig, ENV_PREFIX, MapConfig, SelectionConfig, ServerConfig,
    resolve_journey_credentials,
};
pub use telemetry::{DEFAULT_LOG_FILTER, LogFormat, init_tracing};
