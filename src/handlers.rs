use crate::errors::AppError;
use crate::models::TemperatureResponse;
use crate::resolver::LocationResolver;
use crate::services::WeatherService;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// Shared application state injected into handlers.
pub struct AppState {
    /// Race-based CEP resolver over both geocoding providers.
    pub resolver: LocationResolver,
    /// Weather provider client.
    pub weather: WeatherService,
}

/// Query parameters for `GET /weather`.
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub cep: Option<String>,
}

/// Build the application router.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/weather", get(weather))
        .with_state(state)
}

/// Health check endpoint.
///
/// Returns the service status and version.
///
/// # Returns
///
/// * `(StatusCode, Json<serde_json::Value>)` - HTTP 200 OK with health status JSON.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "cep-weather-api",
            "version": "0.1.0"
        })),
    )
}

/// GET /weather?cep=<8-digit-code>
///
/// Validates the CEP, races both geocoding providers for the city, fetches
/// the current temperature there and returns it in Celsius, Fahrenheit and
/// Kelvin. Orchestration only — every business rule lives in the layer that
/// owns it, and the status-code mapping lives in `AppError`.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `params` - Query parameters containing the CEP.
///
/// # Returns
///
/// * `Result<Json<TemperatureResponse>, AppError>` - The three-scale reading or an error.
pub async fn weather(
    State(state): State<Arc<AppState>>,
    Query(params): Query<WeatherQuery>,
) -> Result<Json<TemperatureResponse>, AppError> {
    let cep = params.cep.as_deref().unwrap_or("").trim().to_string();
    tracing::info!("GET /weather - cep: {:?}", cep);

    if !crate::validation::is_valid_cep(&cep) {
        return Err(AppError::InvalidZipcode);
    }

    let location = state.resolver.resolve(&cep).await.map_err(|e| {
        // AllFailed and TimedOut are logged apart but collapse to the same
        // not-found answer for the caller.
        tracing::warn!("CEP {} resolution failed: {}", cep, e);
        AppError::ZipcodeNotFound
    })?;

    tracing::info!("CEP {} resolved to city {}", cep, location.city);

    let celsius = state.weather.get_temperature(&location.city).await?;

    Ok(Json(TemperatureResponse::from_celsius(celsius)))
}
