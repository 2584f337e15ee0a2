//! Integration tests for the infrastructure crate
//!
//! Wires the real adapters into the map service and runs clicks against
//! a mock server standing in for Nominatim, OSRM and TfL.

use std::sync::Arc;

use application::JourneyMapService;
use domain::{ClickEvent, SelectionState, SessionState, value_objects::TransportMode};
use infrastructure::{AppConfig, DrivingDistanceAdapter, GeocodingAdapter, TrainJourneyAdapter};
use integration_transit::JourneyPlannerCredentials;
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const JOURNEY_PATH: &str = "/Journey/JourneyResults/WC2N5DU/to/N1C4QP";

fn config_for(server: &MockServer) -> AppConfig {
    let mut config = AppConfig::default();
    config.geocoding.base_url = server.uri();
    config.routing.base_url = server.uri();
    config.journey_planner.base_url = server.uri();
    config
}

fn service_for(config: &AppConfig) -> JourneyMapService {
    let geocoder = GeocodingAdapter::with_config(&config.geocoding).unwrap();
    let driving = DrivingDistanceAdapter::with_config(config.routing.clone()).unwrap();
    let trains = TrainJourneyAdapter::with_config(
        &config.journey_planner,
        JourneyPlannerCredentials::new("test-id", "test-key"),
    )
    .unwrap();

    JourneyMapService::new(
        Arc::new(config.destination_catalog().unwrap()),
        Arc::new(geocoder),
        Arc::new(driving),
        Arc::new(trains),
    )
}

async fn mount_geocoder(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/reverse"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "display_name": "Trafalgar Square, London",
            "address": { "road": "Strand", "postcode": "WC2N 5DU" }
        })))
        .mount(server)
        .await;
}

async fn mount_router(server: &MockServer, meters: f64) {
    Mock::given(method("GET"))
        .and(path_regex(r"^/route/v1/driving/-0\.12,51\.5;"))
        .and(query_param("overview", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": "Ok",
            "routes": [{ "distance": meters, "duration": 600.0 }]
        })))
        .mount(server)
        .await;
}

fn click() -> ClickEvent {
    ClickEvent::new(51.5, -0.12)
}

#[tokio::test]
async fn click_resolves_every_route() {
    let server = MockServer::start().await;
    mount_geocoder(&server).await;
    mount_router(&server, 3456.0).await;
    Mock::given(method("GET"))
        .and(path(JOURNEY_PATH))
        .and(query_param("app_id", "test-id"))
        .and(query_param("app_key", "test-key"))
        .and(query_param("mode", "train"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "journeys": [{ "duration": 27, "fare": { "totalCost": 280 } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let service = service_for(&config);
    let mut session = SessionState::new(config.initial_selection());

    let canvas = service.handle_click(&mut session, click()).await.unwrap();

    assert_eq!(session.origin.postal_code.as_ref().unwrap().as_str(), "WC2N5DU");
    assert_eq!(canvas.origin_marker().unwrap().tooltip, "Origin (WC2N5DU)");
    let labels: Vec<&str> = canvas.routes.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["Car: 3.46 km", "Train: 27 min, £2.80"]);
}

#[tokio::test]
async fn journey_planner_failure_keeps_car_route() {
    let server = MockServer::start().await;
    mount_geocoder(&server).await;
    mount_router(&server, 1000.0).await;
    Mock::given(method("GET"))
        .and(path(JOURNEY_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let service = service_for(&config);
    let mut session = SessionState::new(config.initial_selection());

    let canvas = service.handle_click(&mut session, click()).await.unwrap();

    assert_eq!(canvas.routes.len(), 1);
    assert_eq!(canvas.routes[0].mode, TransportMode::Car);
    assert_eq!(canvas.routes[0].label, "Car: 1 km");
}

#[tokio::test]
async fn journey_without_fare_shows_placeholder() {
    let server = MockServer::start().await;
    mount_geocoder(&server).await;
    Mock::given(method("GET"))
        .and(path(JOURNEY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "journeys": [{ "duration": 31 }]
        })))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let service = service_for(&config);
    let mut session = SessionState::new(SelectionState::new(
        true,
        false,
        vec!["Saint Pancras, London".to_string()],
    ));

    let canvas = service.handle_click(&mut session, click()).await.unwrap();

    assert_eq!(canvas.routes.len(), 1);
    assert_eq!(canvas.routes[0].label, "Train: 31 min, £?");
}

#[tokio::test]
async fn geocoder_failure_skips_route_lookups() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    Mock::given(path_regex(r"^/(route|Journey)/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let service = service_for(&config);
    let mut session = SessionState::new(config.initial_selection());

    let canvas = service.handle_click(&mut session, click()).await.unwrap();

    assert!(session.origin.postal_code.is_none());
    assert_eq!(canvas.markers.len(), 1);
    assert_eq!(canvas.origin_marker().unwrap().tooltip, "Origin");
    assert!(canvas.routes.is_empty());
}
