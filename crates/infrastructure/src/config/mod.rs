//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `map`: initial view, default selection and destination catalog
//! - `credentials`: journey planner credentials from the secret store
//!
//! The external service clients bring their own config structs
//! ([`NominatimConfig`], [`OsrmConfig`], [`JourneyPlannerConfig`]), which are
//! embedded here as sections.

mod credentials;
mod map;
mod server;

use std::path::Path;

use domain::{DestinationCatalog, DomainError, SelectionState};
use integration_routing::OsrmConfig;
use integration_transit::{JourneyPlannerConfig, NominatimConfig};
use serde::{Deserialize, Serialize};

use crate::telemetry::LogFormat;

pub use credentials::{TFL_APP_ID_KEY, TFL_APP_KEY_KEY, resolve_journey_credentials};
pub use map::{DestinationConfig, MapConfig, SelectionConfig, build_catalog};
pub use server::ServerConfig;

/// Prefix of environment variables overriding the configuration
pub const ENV_PREFIX: &str = "COMMUTE_MAP";

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Initial map view
    #[serde(default)]
    pub map: MapConfig,

    /// Selection a new session starts with
    #[serde(default)]
    pub selection: SelectionConfig,

    /// Destination catalog; the built-in UK rail termini when absent
    #[serde(default)]
    pub destinations: Option<Vec<DestinationConfig>>,

    /// Reverse geocoder (Nominatim)
    #[serde(default)]
    pub geocoding: NominatimConfig,

    /// Driving router (OSRM)
    #[serde(default)]
    pub routing: OsrmConfig,

    /// Rail journey planner (TfL)
    #[serde(default)]
    pub journey_planner: JourneyPlannerConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional `config.toml`
    ///
    /// Environment variables use the `COMMUTE_MAP_` prefix and `__` between
    /// nested keys, e.g. `COMMUTE_MAP_SERVER__PORT=8080`.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(config::File::with_name("config").required(false))
    }

    /// Load configuration from a specific file, still honouring the
    /// environment overrides
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path).required(true))
    }

    fn build(
        file: config::File<config::FileSourceFile, config::FileFormat>,
    ) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .add_source(file)
            // Override with environment variables (e.g., COMMUTE_MAP_SERVER__PORT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Check every section for values the server cannot run with
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        self.log_format()
            .map_err(|e| format!("server.log_format: {e}"))?;
        self.map.center().map_err(|e| format!("map: {e}"))?;
        if self.map.zoom > 19 {
            return Err(format!("map.zoom must be at most 19, got {}", self.map.zoom));
        }
        self.geocoding.validate().map_err(|e| format!("geocoding: {e}"))?;
        self.routing.validate().map_err(|e| format!("routing: {e}"))?;
        self.journey_planner
            .validate()
            .map_err(|e| format!("journey_planner: {e}"))?;

        let catalog = self.destination_catalog().map_err(|e| format!("destinations: {e}"))?;
        self.selection
            .to_selection()
            .validate_against(&catalog)
            .map_err(|e| format!("selection: {e}"))
    }

    /// The configured log format
    pub fn log_format(&self) -> Result<LogFormat, String> {
        self.server.log_format.parse()
    }

    /// The destination catalog the session picks from
    pub fn destination_catalog(&self) -> Result<DestinationCatalog, DomainError> {
        build_catalog(self.destinations.as_deref())
    }

    /// The selection a new session starts with
    #[must_use]
    pub fn initial_selection(&self) -> SelectionState {
        self.selection.to_selection()
    }
}
