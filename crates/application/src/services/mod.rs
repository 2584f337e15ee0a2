//! Application services - Use case implementations

mod journey_map_service;

pub use journey_map_service::JourneyMapService;
