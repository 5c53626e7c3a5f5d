use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Application-specific error types.
///
/// Every error the `/weather` handler can surface maps to one variant; the
/// HTTP status and response body for each are fixed parts of the API
/// contract.
#[derive(Debug, Clone)]
pub enum AppError {
    /// The supplied CEP is not an 8-digit postal code.
    InvalidZipcode,
    /// Neither geocoding provider produced a usable location.
    ZipcodeNotFound,
    /// The weather provider request or its decoding failed.
    WeatherLookup(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidZipcode => write!(f, "invalid zipcode"),
            AppError::ZipcodeNotFound => write!(f, "can not find zipcode"),
            AppError::WeatherLookup(msg) => write!(f, "failed to get temperature: {}", msg),
        }
    }
}

impl IntoResponse for AppError {
    /// Converts the error into an HTTP response.
    ///
    /// Maps each variant to its contractual status code and JSON body, and
    /// logs it with a severity matching who can act on it.
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::InvalidZipcode => (StatusCode::UNPROCESSABLE_ENTITY, "invalid zipcode"),
            AppError::ZipcodeNotFound => (StatusCode::NOT_FOUND, "can not find zipcode"),
            AppError::WeatherLookup(msg) => {
                tracing::error!("Weather lookup failed: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "failed to get temperature",
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
