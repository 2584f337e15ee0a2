//! Application layer - Use cases and orchestration
//!
//! Defines the ports the map flow depends on and the service that turns a
//! click into an annotated map. Adapters in the infrastructure layer
//! implement the ports.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
