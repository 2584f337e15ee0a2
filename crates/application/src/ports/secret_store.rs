//! Port for secret storage and retrieval
//!
//! The journey planner needs an application id and key. They are read
//! once at startup through this port so the backend (environment
//! variables today) can be swapped without touching the map flow.

use async_trait::async_trait;

use crate::error::ApplicationError;

/// Port for secret storage operations
///
/// This trait is object-safe to allow dynamic dispatch. For lookups that
/// must succeed, use the [`SecretStoreExt`] extension trait.
#[async_trait]
pub trait SecretStorePort: Send + Sync {
    /// Retrieve a secret by its key (e.g. `tfl/app_key`)
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NotFound` if no secret is stored under
    /// the key.
    async fn get_secret(&self, key: &str) -> Result<String, ApplicationError>;

    /// Check if a secret exists
    async fn exists(&self, key: &str) -> Result<bool, ApplicationError>;

    /// Check if the secret store is healthy and accessible
    async fn is_healthy(&self) -> bool;
}

/// Extension trait for secrets the application cannot start without
#[async_trait]
pub trait SecretStoreExt: SecretStorePort {
    /// Retrieve a secret that must be present and non-blank
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` naming the key when the
    /// secret is missing or blank.
    async fn require_secret(&self, key: &str) -> Result<String, ApplicationError> {
        match self.get_secret(key).await {
            Ok(value) if !value.trim().is_empty() => Ok(value),
            Ok(_) => Err(ApplicationError::Configuration(format!(
                "Secret '{key}' is empty"
            ))),
            Err(ApplicationError::NotFound(detail)) => Err(ApplicationError::Configuration(
                format!("Secret '{key}' is not set ({detail})"),
            )),
            Err(e) => Err(e),
        }
    }
}

// Blanket implementation for all types implementing SecretStorePort
impl<S: SecretStorePort + ?Sized> SecretStoreExt for S {}
