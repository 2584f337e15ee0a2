//! Map handlers
//!
//! The page posts clicks here and redraws whatever canvas comes back.
//! Coordinates go out as `[latitude, longitude]` pairs, the order Leaflet
//! takes them in.

use axum::{Json, extract::State};
use domain::{ClickEvent, MapCanvas, MarkerKind, SessionPhase, value_objects::GeoLocation};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use validator::Validate;

use crate::{error::ApiError, middleware::ValidatedJson, state::AppState};

/// A map click
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct ClickRequest {
    #[validate(range(min = -90.0, max = 90.0, message = "must be between -90 and 90"))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0, message = "must be between -180 and 180"))]
    pub longitude: f64,
}

/// A marker on the rendered map
#[derive(Debug, Clone, Serialize)]
pub struct MarkerView {
    pub position: [f64; 2],
    pub tooltip: String,
    pub kind: MarkerKind,
}

/// A straight origin-to-destination line on the rendered map
#[derive(Debug, Clone, Serialize)]
pub struct RouteView {
    pub from: [f64; 2],
    pub to: [f64; 2],
    pub mode: String,
    pub color: &'static str,
    pub label: String,
}

/// Rendered map returned to the page
#[derive(Debug, Clone, Serialize)]
pub struct MapResponse {
    pub phase: SessionPhase,
    pub center: [f64; 2],
    pub zoom: u8,
    pub markers: Vec<MarkerView>,
    pub routes: Vec<RouteView>,
}

const fn lat_lon(location: GeoLocation) -> [f64; 2] {
    [location.latitude(), location.longitude()]
}

impl MapResponse {
    pub(crate) fn new(phase: SessionPhase, canvas: MapCanvas) -> Self {
        let routes = canvas
            .routes
            .into_iter()
            .map(|route| RouteView {
                from: lat_lon(route.origin),
                to: lat_lon(route.destination),
                mode: route.mode.to_string(),
                color: route.color(),
                label: route.label,
            })
            .collect();

        Self {
            phase,
            center: lat_lon(canvas.center),
            zoom: canvas.zoom,
            markers: canvas
                .markers
                .into_iter()
                .map(|marker| MarkerView {
                    position: lat_lon(marker.location),
                    tooltip: marker.tooltip,
                    kind: marker.kind,
                })
                .collect(),
            routes,
        }
    }
}

/// The map as last rendered for the session
pub async fn get_map(State(state): State<AppState>) -> Json<MapResponse> {
    let session = state.session.lock().await;
    let canvas = state.map_service.current_map(&session);
    Json(MapResponse::new(session.phase(), canvas))
}

/// Set the origin from a map click and render the journeys from it
#[instrument(skip(state))]
pub async fn click(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ClickRequest>,
) -> Result<Json<MapResponse>, ApiError> {
    let mut session = state.session.lock().await;
    let canvas = state
        .map_service
        .handle_click(&mut session, ClickEvent::new(request.latitude, request.longitude))
        .await?;

    debug!(routes = canvas.routes.len(), "Rendered map for click");
    Ok(Json(MapResponse::new(session.phase(), canvas)))
}
