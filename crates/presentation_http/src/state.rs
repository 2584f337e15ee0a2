//! Application state shared across handlers

use std::sync::Arc;

use application::JourneyMapService;
use domain::{SelectionState, SessionState};
use tokio::sync::Mutex;

/// Shared application state
///
/// Holds the single interactive session. The mutex is held for the whole
/// of a click or selection update, so interactions are handled one at a
/// time in arrival order.
#[derive(Clone)]
pub struct AppState {
    /// Service rendering map canvases
    pub map_service: Arc<JourneyMapService>,
    /// The interactive session
    pub session: Arc<Mutex<SessionState>>,
}

impl AppState {
    /// Create state with a fresh session using the given initial selection
    pub fn new(map_service: Arc<JourneyMapService>, selection: SelectionState) -> Self {
        Self {
            map_service,
            session: Arc::new(Mutex::new(SessionState::new(selection))),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("map_service", &self.map_service)
            .finish_non_exhaustive()
    }
}
