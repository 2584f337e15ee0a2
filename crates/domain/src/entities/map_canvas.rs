//! Map canvas
//!
//! Everything the map widget draws for one render: a view (centre and
//! zoom), point markers, and straight route lines annotated with a label.
//! A canvas is built from scratch on every render and never diffed.

use serde::{Deserialize, Serialize};

use crate::value_objects::{GeoLocation, TransportMode};

/// Default zoom level showing the whole of Great Britain
pub const DEFAULT_ZOOM: u8 = 6;

/// What a marker represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    /// The clicked origin
    Origin,
    /// A chosen destination
    Destination,
}

/// A point marker with tooltip text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub location: GeoLocation,
    pub tooltip: String,
    pub kind: MarkerKind,
}

/// A straight line between two points, annotated with a journey metric
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteAnnotation {
    pub origin: GeoLocation,
    pub destination: GeoLocation,
    pub mode: TransportMode,
    pub label: String,
}

impl RouteAnnotation {
    /// Line colour for the map widget
    #[must_use]
    pub const fn color(&self) -> &'static str {
        self.mode.color()
    }
}

/// Markers and routes accumulated for a single render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapCanvas {
    pub center: GeoLocation,
    pub zoom: u8,
    pub markers: Vec<Marker>,
    pub routes: Vec<RouteAnnotation>,
}

impl MapCanvas {
    /// Create an empty canvas
    #[must_use]
    pub const fn new(center: GeoLocation, zoom: u8) -> Self {
        Self {
            center,
            zoom,
            markers: Vec::new(),
            routes: Vec::new(),
        }
    }

    /// Add a point marker
    pub fn add_marker(&mut self, location: GeoLocation, tooltip: impl Into<String>, kind: MarkerKind) {
        self.markers.push(Marker {
            location,
            tooltip: tooltip.into(),
            kind,
        });
    }

    /// Add a route line between two points
    pub fn add_route(
        &mut self,
        origin: GeoLocation,
        destination: GeoLocation,
        mode: TransportMode,
        label: impl Into<String>,
    ) {
        self.routes.push(RouteAnnotation {
            origin,
            destination,
            mode,
            label: label.into(),
        });
    }

    /// The origin marker, if one was drawn
    #[must_use]
    pub fn origin_marker(&self) -> Option<&Marker> {
        self.markers.iter().find(|m| m.kind == MarkerKind::Origin)
    }

    /// Routes of a single transport mode
    pub fn routes_for(&self, mode: TransportMode) -> impl Iterator<Item = &RouteAnnotation> {
        self.routes.iter().filter(move |r| r.mode == mode)
    }
}

impl Default for MapCanvas {
    fn default() -> Self {
        Self::new(GeoLocation::uk_center(), DEFAULT_ZOOM)
    }
}
