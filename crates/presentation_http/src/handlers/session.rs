//! Session handlers: the user's selection and origin

use axum::{Json, extract::State};
use domain::{SelectionState, SessionPhase, SessionState};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use validator::Validate;

use super::map::MapResponse;
use crate::{error::ApiError, middleware::ValidatedJson, state::AppState};

/// Replacement selection sent by the page's controls
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SelectionRequest {
    pub show_train: bool,
    pub show_car: bool,
    #[validate(length(max = 64, message = "at most 64 destinations"))]
    #[serde(default)]
    pub destinations: Vec<String>,
}

impl From<SelectionRequest> for SelectionState {
    fn from(request: SelectionRequest) -> Self {
        Self::new(request.show_train, request.show_car, request.destinations)
    }
}

/// Current selection
#[derive(Debug, Clone, Serialize)]
pub struct SelectionView {
    pub show_train: bool,
    pub show_car: bool,
    pub destinations: Vec<String>,
}

/// Current origin, present once a click was made
#[derive(Debug, Clone, Serialize)]
pub struct OriginView {
    pub latitude: f64,
    pub longitude: f64,
    pub postal_code: Option<String>,
}

/// Session snapshot
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub phase: SessionPhase,
    pub selection: SelectionView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<OriginView>,
}

impl From<&SessionState> for SessionResponse {
    fn from(session: &SessionState) -> Self {
        let origin = session.origin.location.map(|location| OriginView {
            latitude: location.latitude(),
            longitude: location.longitude(),
            postal_code: session.origin.postal_code.as_ref().map(ToString::to_string),
        });

        Self {
            phase: session.phase(),
            selection: SelectionView {
                show_train: session.selection.show_train,
                show_car: session.selection.show_car,
                destinations: session.selection.destinations().to_vec(),
            },
            origin,
        }
    }
}

/// Snapshot of the session
pub async fn get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let session = state.session.lock().await;
    Json(SessionResponse::from(&*session))
}

/// Replace the selection and re-render from the current origin, if any
#[instrument(skip(state, request))]
pub async fn update_selection(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SelectionRequest>,
) -> Result<Json<MapResponse>, ApiError> {
    let mut session = state.session.lock().await;
    let canvas = state
        .map_service
        .update_selection(&mut session, request.into())
        .await?;

    Ok(Json(MapResponse::new(session.phase(), canvas)))
}
