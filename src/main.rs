mod config;
mod errors;
mod handlers;
mod models;
mod resolver;
mod services;
mod temperature;
mod validation;

use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::resolver::LocationResolver;
use crate::services::{BrasilApiClient, ViaCepClient, WeatherService};

/// Main entry point for the application.
///
/// This function initializes the application, including:
/// - Logging and tracing.
/// - Configuration loading.
/// - The shared outbound HTTP client.
/// - Geocoding provider clients and the race resolver.
/// - HTTP routes and middleware (CORS, tracing, body limit).
///
/// It then starts the Axum server.
///
/// # Returns
///
/// * `anyhow::Result<()>` - Ok if the server runs successfully, or an error if initialization fails.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cep_weather_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // One shared outbound client: connections are reused across requests and
    // every call carries its own transport timeout, independent of the
    // resolver's race deadline.
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;

    // Wire up both geocoding providers behind the race resolver
    let resolver = LocationResolver::new(vec![
        Arc::new(BrasilApiClient::new(client.clone(), &config)),
        Arc::new(ViaCepClient::new(client.clone(), &config)),
    ]);
    tracing::info!("Location resolver initialized with providers: brasilapi, viacep");

    let weather = WeatherService::new(client, &config);

    // Build application state
    let app_state = Arc::new(handlers::AppState { resolver, weather });

    let app = handlers::app(app_state)
        .layer(
            ServiceBuilder::new()
                // Request size limit: this API takes a query parameter, any
                // sizeable body is junk.
                .layer(RequestBodyLimitLayer::new(64 * 1024)),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
