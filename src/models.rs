use serde::{Deserialize, Serialize};

use crate::temperature::{celsius_to_fahrenheit, celsius_to_kelvin};

// ============ Domain Models ============

/// A resolved location for a Brazilian postal code.
///
/// Produced by a geocoding provider client. `city` is guaranteed non-empty:
/// provider clients refuse to build a `Location` from a payload whose city
/// field is missing or blank.
#[derive(Debug, Clone, Serialize)]
pub struct Location {
    /// The postal code that was resolved (echo of the input).
    pub cep: String,
    /// Neighborhood/district label, when the provider reports one.
    pub district: Option<String>,
    /// Two-letter state code (UF), when the provider reports one.
    pub state: Option<String>,
    /// City name used for the weather lookup.
    pub city: String,
}

// ============ Provider Wire Models ============

/// Address payload returned by BrasilAPI (`/api/cep/v1/{cep}`).
#[derive(Debug, Clone, Deserialize)]
pub struct BrasilApiAddress {
    #[serde(default)]
    pub cep: String,
    /// Two-letter state code.
    #[serde(default)]
    pub state: String,
    /// City name — BrasilAPI reports it in a dedicated field.
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub neighborhood: String,
}

/// Address payload returned by ViaCEP (`/ws/{cep}/json`).
///
/// ViaCEP has no dedicated city field: `localidade` carries the city name
/// and doubles as the district label. Not-found CEPs come back as HTTP 200
/// with an `{"erro": true}` body, which decodes here with every field empty.
#[derive(Debug, Clone, Deserialize)]
pub struct ViaCepAddress {
    #[serde(default)]
    pub cep: String,
    /// Locality (city) name.
    #[serde(default)]
    pub localidade: String,
    /// Two-letter state code.
    #[serde(default)]
    pub uf: String,
}

// ============ Weather Wire Models ============

/// Response payload from the weather provider (`/v1/current.json`).
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherApiResponse {
    pub current: CurrentConditions,
}

/// Current conditions block of the weather payload.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentConditions {
    /// Current temperature in Celsius.
    pub temp_c: f64,
}

// ============ Response Models ============

/// The `/weather` response body: one reading in three scales.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemperatureResponse {
    pub celsius: f64,
    pub fahrenheit: f64,
    pub kelvin: f64,
}

impl TemperatureResponse {
    /// Build the response from a Celsius reading, deriving the other scales.
    pub fn from_celsius(celsius: f64) -> Self {
        Self {
            celsius,
            fahrenheit: celsius_to_fahrenheit(celsius),
            kelvin: celsius_to_kelvin(celsius),
        }
    }
}
