//! Transit error types

use thiserror::Error;

/// Errors that can occur during journey planning
#[derive(Debug, Error)]
pub enum TransitError {
    /// Connection to the journey planner failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Journey planner answered with a non-success status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the journey planner
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// No journeys found between origin and destination
    #[error("No journeys found from {from} to {to}")]
    NoJourneysFound {
        /// Origin postal code
        from: String,
        /// Destination postal code
        to: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}
