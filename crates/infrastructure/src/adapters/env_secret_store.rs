//! Environment-based secret store adapter
//!
//! The journey planner credentials arrive as environment variables next
//! to the rest of the `COMMUTE_MAP_*` settings, but are read through
//! [`SecretStorePort`] so they never end up in [`AppConfig`](crate::AppConfig).

use std::env;

use application::{error::ApplicationError, ports::SecretStorePort};
use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use crate::config::ENV_PREFIX;

/// Secret store backed by process environment variables
///
/// A secret key such as `tfl/app-key` maps to `{PREFIX}_TFL_APP_KEY`:
/// path separators and hyphens become underscores and the result is
/// upper-cased.
#[derive(Debug, Clone)]
pub struct EnvSecretStore {
    prefix: String,
}

impl Default for EnvSecretStore {
    fn default() -> Self {
        Self::with_prefix(ENV_PREFIX)
    }
}

impl EnvSecretStore {
    /// Store using the application prefix `COMMUTE_MAP`
    pub fn new() -> Self {
        Self::default()
    }

    /// Store using a custom prefix
    ///
    /// ```
    /// use infrastructure::adapters::EnvSecretStore;
    ///
    /// let store = EnvSecretStore::with_prefix("STAGING");
    /// assert_eq!(store.env_var_for("tfl/app_key"), "STAGING_TFL_APP_KEY");
    /// ```
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Name of the environment variable holding `key`
    pub fn env_var_for(&self, key: &str) -> String {
        let suffix: String = key
            .chars()
            .map(|c| match c {
                '/' | '-' | '.' => '_',
                other => other.to_ascii_uppercase(),
            })
            .collect();

        if self.prefix.is_empty() {
            suffix
        } else {
            format!("{}_{suffix}", self.prefix)
        }
    }
}

#[async_trait]
impl SecretStorePort for EnvSecretStore {
    #[instrument(skip(self), fields(env_var = tracing::field::Empty))]
    async fn get_secret(&self, key: &str) -> Result<String, ApplicationError> {
        let env_var = self.env_var_for(key);
        tracing::Span::current().record("env_var", env_var.as_str());

        match env::var(&env_var) {
            Ok(value) => {
                debug!("Secret read from environment");
                Ok(value)
            },
            Err(env::VarError::NotPresent) => {
                warn!("Secret variable is not set");
                Err(ApplicationError::NotFound(format!("set {env_var}")))
            },
            Err(env::VarError::NotUnicode(_)) => Err(ApplicationError::Configuration(format!(
                "{env_var} is not valid UTF-8"
            ))),
        }
    }

    async fn exists(&self, key: &str) -> Result<bool, ApplicationError> {
        Ok(env::var_os(self.env_var_for(key)).is_some())
    }

    async fn is_healthy(&self) -> bool {
        true
    }
}
