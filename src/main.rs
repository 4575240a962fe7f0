use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wonderrun::config::Config;
use wonderrun::services::directions::GoogleDirectionsClient;
use wonderrun::services::geocoding::GeocodingClient;
use wonderrun::services::planner::RoutePlanner;
use wonderrun::services::weather::WeatherClient;
use wonderrun::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wonderrun=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting Wonder Run API server");
    tracing::info!("Configuration loaded successfully");

    // Initialize services
    let directions = Arc::new(GoogleDirectionsClient::new(
        config.google_maps_api_key.clone(),
    ));
    let geocoding = GeocodingClient::new(config.google_maps_api_key.clone());
    let weather = match config.openweather_api_key.clone() {
        Some(key) => Some(WeatherClient::new(key)),
        None => {
            tracing::info!("OPENWEATHER_API_KEY not set; weather endpoint disabled");
            None
        }
    };
    let planner = RoutePlanner::new(directions);

    // Create application state
    let state = Arc::new(AppState {
        planner,
        geocoding,
        weather,
        default_bearing_count: config.planner.bearing_count,
        map_link_waypoints: config.planner.map_link_waypoints,
    });

    // Build router with CORS and tracing
    let app = Router::new()
        .nest("/api/v1", wonderrun::routes::create_router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
