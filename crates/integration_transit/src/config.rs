//! Journey planner configuration

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Configuration for the TfL journey planner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JourneyPlannerConfig {
    /// Base URL for the TfL Unified API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Mode filter sent with every query
    #[serde(default = "default_mode")]
    pub mode: String,
}

fn default_base_url() -> String {
    "https://api.tfl.gov.uk".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_mode() -> String {
    "train".to_string()
}

impl Default for JourneyPlannerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            mode: default_mode(),
        }
    }
}

impl JourneyPlannerConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.mode.trim().is_empty() {
            return Err("mode must not be empty".to_string());
        }

        Ok(())
    }
}

/// Application credentials for the journey planner
///
/// Kept apart from [`JourneyPlannerConfig`] so they are never serialized
/// or logged.
#[derive(Debug, Clone)]
pub struct JourneyPlannerCredentials {
    /// Application id (`app_id` query parameter)
    pub app_id: SecretString,
    /// Application key (`app_key` query parameter)
    pub app_key: SecretString,
}

impl JourneyPlannerCredentials {
    /// Create credentials from plain strings
    #[must_use]
    pub fn new(app_id: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            app_id: SecretString::from(app_id.into()),
            app_key: SecretString::from(app_key.into()),
        }
    }
}
