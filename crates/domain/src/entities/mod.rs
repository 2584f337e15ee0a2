//! Domain entities - Reference data, session state and the rendered map

mod destination;
mod map_canvas;
mod selection;
mod session;

pub use destination::{DEFAULT_DESTINATION, DestinationCatalog, DestinationRecord};
pub use map_canvas::{DEFAULT_ZOOM, MapCanvas, Marker, MarkerKind, RouteAnnotation};
pub use selection::SelectionState;
pub use session::{ClickEvent, OriginState, SessionPhase, SessionState};
