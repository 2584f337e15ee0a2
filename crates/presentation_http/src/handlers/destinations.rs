//! Destination catalog handler

use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::AppState;

/// A destination the user can pick
#[derive(Debug, Clone, Serialize)]
pub struct DestinationResponse {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub postal_code: String,
}

/// List the destination catalog in catalog order
pub async fn list_destinations(State(state): State<AppState>) -> Json<Vec<DestinationResponse>> {
    let destinations = state
        .map_service
        .catalog()
        .iter()
        .map(|record| DestinationResponse {
            name: record.name().to_string(),
            latitude: record.location().latitude(),
            longitude: record.location().longitude(),
            postal_code: record.postal_code().to_string(),
        })
        .collect();

    Json(destinations)
}
