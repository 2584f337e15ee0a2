//! Domain layer for the commute map
//!
//! Contains the value objects, reference data and session state the rest
//! of the workspace is built on. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
