//! Commute map HTTP presentation layer
//!
//! Serves the map page and the JSON API the page talks to: clicks and
//! selection changes go in, annotated map canvases come out.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use middleware::{ValidatedJson, ValidationError};
pub use routes::create_router;
pub use state::AppState;
