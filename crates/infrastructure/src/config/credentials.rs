//! Journey planner credential resolution
//!
//! The planner's application id and key are read from the secret store
//! once at startup. The server refuses to start without them.

use application::{
    error::ApplicationError,
    ports::{SecretStoreExt, SecretStorePort},
};
use integration_transit::JourneyPlannerCredentials;
use tracing::{info, instrument};

/// Secret key of the journey planner application id
pub const TFL_APP_ID_KEY: &str = "tfl/app_id";

/// Secret key of the journey planner application key
pub const TFL_APP_KEY_KEY: &str = "tfl/app_key";

/// Resolve the journey planner credentials
///
/// # Errors
///
/// Returns `ApplicationError::Configuration` if either credential is
/// missing or blank.
#[instrument(skip(store))]
pub async fn resolve_journey_credentials(
    store: &dyn SecretStorePort,
) -> Result<JourneyPlannerCredentials, ApplicationError> {
    let app_id = store.require_secret(TFL_APP_ID_KEY).await?;
    let app_key = store.require_secret(TFL_APP_KEY_KEY).await?;

    info!("Journey planner credentials loaded");
    Ok(JourneyPlannerCredentials::new(app_id, app_key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    #[derive(Debug, Default)]
    struct FixedSecrets(HashMap<&'static str, &'static str>);

    #[async_trait]
    impl SecretStorePort for FixedSecrets {
        async fn get_secret(&self, key: &str) -> Result<String, ApplicationError> {
            self.0
                .get(key)
                .map(|v| (*v).to_string())
                .ok_or_else(|| ApplicationError::NotFound(key.to_string()))
        }

        async fn exists(&self, key: &str) -> Result<bool, ApplicationError> {
            Ok(self.0.contains_key(key))
        }

        async fn is_healthy(&self) -> bool {
            true
        }
    }

    #[tokio::test]
    async fn resolves_both_credentials() {
        let store = FixedSecrets(HashMap::from([
            (TFL_APP_ID_KEY, "my-app"),
            (TFL_APP_KEY_KEY, "s3cret"),
        ]));

        let creds = resolve_journey_credentials(&store).await.unwrap();

        assert_eq!(creds.app_id.expose_secret(), "my-app");
        assert_eq!(creds.app_key.expose_secret(), "s3cret");
    }

    #[tokio::test]
    async fn missing_key_is_fatal() {
        let store = FixedSecrets(HashMap::from([(TFL_APP_ID_KEY, "my-app")]));

        let err = resolve_journey_credentials(&store).await.unwrap_err();

        assert!(matches!(err, ApplicationError::Configuration(ref msg) if msg.contains(TFL_APP_KEY_KEY)));
    }

    #[tokio::test]
    async fn blank_id_is_fatal() {
        let store = FixedSecrets(HashMap::from([
            (TFL_APP_ID_KEY, ""),
            (TFL_APP_KEY_KEY, "s3cret"),
        ]));

        let err = resolve_journey_credentials(&store).await.unwrap_err();

        assert!(matches!(err, ApplicationError::Configuration(_)));
    }
}
