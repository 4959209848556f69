use axum::Router;
use roadside::config::Config;
use roadside::services::AttractionFinder;
use roadside::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roadside=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting roadside API server");
    tracing::info!(
        step_km = config.finder.step_km,
        radius_km = config.finder.radius_km,
        corridor_km = config.finder.corridor_km,
        "Configuration loaded successfully"
    );

    let finder = AttractionFinder::from_config(&config);

    let state = Arc::new(AppState {
        finder,
        finder_config: config.finder.clone(),
    });

    // Build router with CORS and tracing
    let app = Router::new()
        .nest("/api", roadside::routes::create_router(state))
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
