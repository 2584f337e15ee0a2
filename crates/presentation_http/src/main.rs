//! Commute Map HTTP Server
//!
//! Main entry point: loads configuration, resolves the journey planner
//! credentials and serves the map page with its JSON API.

use std::{sync::Arc, time::Duration};

use application::JourneyMapService;
use infrastructure::{
    AppConfig, DEFAULT_LOG_FILTER, DrivingDistanceAdapter, ENV_PREFIX, EnvSecretStore,
    GeocodingAdapter, LogFormat, TrainJourneyAdapter, init_tracing, resolve_journey_credentials,
};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration before tracing so the log format can be honoured
    let loaded = AppConfig::load();
    let log_format = loaded
        .as_ref()
        .ok()
        .and_then(|config| config.log_format().ok())
        .unwrap_or(LogFormat::Text);
    init_tracing(log_format, DEFAULT_LOG_FILTER)
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    info!("🗺️ Commute Map v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = loaded.unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        destinations = ?config.selection.destinations,
        "Configuration loaded"
    );

    // Journey planner credentials are mandatory; refuse to start without them
    let secrets = EnvSecretStore::with_prefix(ENV_PREFIX);
    let credentials = resolve_journey_credentials(&secrets)
        .await
        .map_err(|e| anyhow::anyhow!("Missing journey planner credentials: {e}"))?;

    // Initialize adapters
    let geocoder = GeocodingAdapter::with_config(&config.geocoding)
        .map_err(|e| anyhow::anyhow!("Failed to initialize geocoder: {e}"))?;
    let driving = DrivingDistanceAdapter::with_config(config.routing.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize router: {e}"))?;
    let trains = TrainJourneyAdapter::with_config(&config.journey_planner, credentials)
        .map_err(|e| anyhow::anyhow!("Failed to initialize journey planner: {e}"))?;

    // Initialize service
    let catalog = config
        .destination_catalog()
        .map_err(|e| anyhow::anyhow!("Invalid destinations: {e}"))?;
    let center = config
        .map
        .center()
        .map_err(|e| anyhow::anyhow!("Invalid map center: {e}"))?;
    let map_service = JourneyMapService::new(
        Arc::new(catalog),
        Arc::new(geocoder),
        Arc::new(driving),
        Arc::new(trains),
    )
    .with_view(center, config.map.zoom);

    let state = AppState::new(Arc::new(map_service), config.initial_selection());

    // Build router
    let app = routes::create_router(state);

    // Configure CORS layer
    let app = if !config.server.cors_enabled {
        app
    } else if config.server.allowed_origins.is_empty() {
        // Development mode: allow all origins
        app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        use axum::http::{HeaderValue, Method};
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        app.layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::POST, Method::PUT])
                .allow_headers(Any),
        )
    };

    let app = app
        .layer(RequestBodyLimitLayer::new(config.server.max_body_size_json_bytes))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Map available at http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("👋 Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("⏳ Waiting up to {:?} for connections to close...", timeout);
}
