//! Journey map service
//!
//! Turns the user's latest click into an annotated map. The service is
//! stateless; everything that survives between interactions lives in the
//! [`SessionState`] the caller passes in.
//!
//! For a click the flow is strictly sequential: resolve the postal code,
//! then for each chosen destination draw its marker, the car route and the
//! train route. A failed fetch only removes its own route line.

use std::{fmt, sync::Arc};

use domain::{
    ClickEvent, DEFAULT_ZOOM, DestinationCatalog, DestinationRecord, MapCanvas, MarkerKind,
    OriginState, SelectionState, SessionState,
    value_objects::{GeoLocation, PostalCode, TransportMode, car_label},
};
use tracing::{debug, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{DrivingDistancePort, GeocodingPort, TrainJourneyPort},
};

/// Service building map canvases for the interactive session
pub struct JourneyMapService {
    catalog: Arc<DestinationCatalog>,
    geocoder: Arc<dyn GeocodingPort>,
    driving: Arc<dyn DrivingDistancePort>,
    trains: Arc<dyn TrainJourneyPort>,
    center: GeoLocation,
    zoom: u8,
}

impl fmt::Debug for JourneyMapService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JourneyMapService")
            .field("destinations", &self.catalog.len())
            .field("center", &self.center)
            .field("zoom", &self.zoom)
            .finish_non_exhaustive()
    }
}

impl JourneyMapService {
    /// Create a service over a destination catalog and the three fetchers
    pub fn new(
        catalog: Arc<DestinationCatalog>,
        geocoder: Arc<dyn GeocodingPort>,
        driving: Arc<dyn DrivingDistancePort>,
        trains: Arc<dyn TrainJourneyPort>,
    ) -> Self {
        Self {
            catalog,
            geocoder,
            driving,
            trains,
            center: GeoLocation::uk_center(),
            zoom: DEFAULT_ZOOM,
        }
    }

    /// Override the initial map view
    #[must_use]
    pub const fn with_view(mut self, center: GeoLocation, zoom: u8) -> Self {
        self.center = center;
        self.zoom = zoom;
        self
    }

    /// The destination catalog this service draws from
    #[must_use]
    pub fn catalog(&self) -> &DestinationCatalog {
        &self.catalog
    }

    /// Render the map before any click: one marker per chosen destination
    #[must_use]
    pub fn base_map(&self, selection: &SelectionState) -> MapCanvas {
        let mut canvas = self.empty_canvas();
        for record in self.chosen(selection) {
            canvas.add_marker(record.location(), record.name(), MarkerKind::Destination);
        }
        canvas
    }

    /// Handle a click on the map
    ///
    /// Replaces the session's origin with the clicked point and renders a
    /// fresh canvas from it.
    ///
    /// # Errors
    ///
    /// Returns an error if the click lies outside the valid coordinate
    /// range. The session is left untouched in that case.
    #[instrument(skip(self, session), fields(lat = click.latitude, lon = click.longitude))]
    pub async fn handle_click(
        &self,
        session: &mut SessionState,
        click: ClickEvent,
    ) -> Result<MapCanvas, ApplicationError> {
        let location = click.to_location()?;
        Ok(self.render_from(session, location).await)
    }

    /// Replace the user's selection and re-render
    ///
    /// With an origin already set the click flow runs again from the stored
    /// origin, so toggles take effect without a new click.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownDestination` if the selection names a
    /// destination missing from the catalog. The session is left untouched.
    #[instrument(skip(self, session, selection), fields(
        show_train = selection.show_train,
        show_car = selection.show_car,
        destinations = selection.destinations().len()
    ))]
    pub async fn update_selection(
        &self,
        session: &mut SessionState,
        selection: SelectionState,
    ) -> Result<MapCanvas, ApplicationError> {
        selection.validate_against(&self.catalog)?;
        session.selection = selection;

        if let Some(origin) = session.origin.location {
            return Ok(self.render_from(session, origin).await);
        }

        let canvas = self.base_map(&session.selection);
        session.last_map = Some(canvas.clone());
        Ok(canvas)
    }

    /// The last rendered canvas, or the base map if nothing was rendered yet
    #[must_use]
    pub fn current_map(&self, session: &SessionState) -> MapCanvas {
        session
            .last_map
            .clone()
            .unwrap_or_else(|| self.base_map(&session.selection))
    }

    async fn render_from(&self, session: &mut SessionState, origin: GeoLocation) -> MapCanvas {
        session.origin = OriginState::at(origin, None);

        let postal_code = self.geocoder.postal_code(&origin).await;
        debug!(origin = %origin, postal_code = ?postal_code, "Origin resolved");

        let mut canvas = self.empty_canvas();
        let tooltip = postal_code
            .as_ref()
            .map_or_else(|| "Origin".to_string(), |code| format!("Origin ({code})"));
        canvas.add_marker(origin, tooltip, MarkerKind::Origin);

        match &postal_code {
            Some(code) if session.selection.has_destinations() => {
                for record in self.chosen(&session.selection) {
                    self.annotate(&mut canvas, &session.selection, origin, code, record)
                        .await;
                }
            },
            Some(_) => debug!("No destinations chosen"),
            None => warn!(origin = %origin, "No postal code for origin, skipping journeys"),
        }

        session.origin.postal_code = postal_code;
        session.last_map = Some(canvas.clone());
        canvas
    }

    async fn annotate(
        &self,
        canvas: &mut MapCanvas,
        selection: &SelectionState,
        origin: GeoLocation,
        origin_code: &PostalCode,
        record: &DestinationRecord,
    ) {
        let destination = record.location();
        canvas.add_marker(destination, record.name(), MarkerKind::Destination);

        if selection.is_enabled(TransportMode::Car) {
            let distance_km = self.driving.driving_distance_km(&origin, &destination).await;
            debug!(destination = record.name(), distance_km = ?distance_km, "Car distance");
            if let Some(km) = distance_km {
                canvas.add_route(origin, destination, TransportMode::Car, car_label(km));
            }
        }

        if selection.is_enabled(TransportMode::Train) {
            let journey = self
                .trains
                .train_journey(origin_code, record.postal_code())
                .await;
            debug!(
                destination = record.name(),
                duration_minutes = ?journey.duration_minutes,
                fare_pence = ?journey.fare_pence,
                "Train journey"
            );
            if let Some(label) = journey.label() {
                canvas.add_route(origin, destination, TransportMode::Train, label);
            }
        }
    }

    fn chosen<'a>(
        &'a self,
        selection: &'a SelectionState,
    ) -> impl Iterator<Item = &'a DestinationRecord> + 'a {
        selection
            .destinations()
            .iter()
            .filter_map(|name| {
                let record = self.catalog.get(name);
                if record.is_none() {
                    warn!(destination = %name, "Chosen destination not in catalog");
                }
                record
            })
    }

    fn empty_canvas(&self) -> MapCanvas {
        MapCanvas::new(self.center, self.zoom)
    }
}
