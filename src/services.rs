use crate::config::Config;
use crate::errors::AppError;
use crate::models::{BrasilApiAddress, Location, ViaCepAddress, WeatherApiResponse};
use async_trait::async_trait;
use reqwest::Client;
use std::fmt;

/// Why a provider call produced no usable location.
///
/// Raw transport errors never cross this boundary; every failure is
/// normalized to one of these reasons before the resolver sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// Connection-level failure (DNS, refused, reset).
    Network(String),
    /// The provider answered with a non-success HTTP status.
    Status(u16),
    /// The body did not match the provider's schema.
    Decode(String),
    /// Structurally valid response, but the city field was empty.
    EmptyResult,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Network(msg) => write!(f, "network error: {}", msg),
            FailureReason::Status(code) => write!(f, "unexpected status {}", code),
            FailureReason::Decode(msg) => write!(f, "decode error: {}", msg),
            FailureReason::EmptyResult => write!(f, "response had no city"),
        }
    }
}

/// Outcome of a single provider call.
pub type ProviderOutcome = Result<Location, FailureReason>;

/// A geocoding provider that can resolve a CEP to a location.
///
/// Implementations issue exactly one network call per invocation — no
/// internal retries. The resolver races two of these against each other.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Short provider name, used in logs.
    fn name(&self) -> &'static str;

    /// Fetch the location for an already-validated CEP.
    async fn fetch_location(&self, cep: &str) -> ProviderOutcome;
}

/// Client for the BrasilAPI CEP endpoint.
pub struct BrasilApiClient {
    client: Client,
    base_url: String,
}

impl BrasilApiClient {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.brasilapi_base_url.clone(),
        }
    }
}

#[async_trait]
impl LocationProvider for BrasilApiClient {
    fn name(&self) -> &'static str {
        "brasilapi"
    }

    async fn fetch_location(&self, cep: &str) -> ProviderOutcome {
        let url = format!("{}/api/cep/v1/{}", self.base_url, cep);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => return Err(FailureReason::Network(e.to_string())),
        };

        if !response.status().is_success() {
            return Err(FailureReason::Status(response.status().as_u16()));
        }

        let address: BrasilApiAddress = match response.json().await {
            Ok(address) => address,
            Err(e) => return Err(FailureReason::Decode(e.to_string())),
        };

        if address.city.trim().is_empty() {
            return Err(FailureReason::EmptyResult);
        }

        // BrasilAPI reports the city in its own field; the district label
        // comes from `neighborhood`.
        Ok(Location {
            cep: cep.to_string(),
            district: Some(address.neighborhood),
            state: Some(address.state),
            city: address.city,
        })
    }
}

/// Client for the ViaCEP endpoint.
pub struct ViaCepClient {
    client: Client,
    base_url: String,
}

impl ViaCepClient {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.viacep_base_url.clone(),
        }
    }
}

#[async_trait]
impl LocationProvider for ViaCepClient {
    fn name(&self) -> &'static str {
        "viacep"
    }

    async fn fetch_location(&self, cep: &str) -> ProviderOutcome {
        let url = format!("{}/ws/{}/json", self.base_url, cep);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => return Err(FailureReason::Network(e.to_string())),
        };

        if !response.status().is_success() {
            return Err(FailureReason::Status(response.status().as_u16()));
        }

        let address: ViaCepAddress = match response.json().await {
            Ok(address) => address,
            Err(e) => return Err(FailureReason::Decode(e.to_string())),
        };

        // ViaCEP's "erro" payload for unknown CEPs decodes with an empty
        // localidade and lands here as well.
        if address.localidade.trim().is_empty() {
            return Err(FailureReason::EmptyResult);
        }

        // ViaCEP has no dedicated city field: localidade doubles as the
        // district label and the city name.
        Ok(Location {
            cep: cep.to_string(),
            district: Some(address.localidade.clone()),
            state: Some(address.uf),
            city: address.localidade,
        })
    }
}

/// Client for the weather provider's current-conditions endpoint.
pub struct WeatherService {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WeatherService {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.weather_base_url.clone(),
            api_key: config.weather_api_key.clone(),
        }
    }

    /// Fetch the current temperature in Celsius for a city.
    ///
    /// The city name arrives verbatim from the resolver (multi-word and
    /// accented names included) and is percent-encoded into the query.
    ///
    /// # Arguments
    ///
    /// * `city` - City name as reported by the winning geocoding provider.
    ///
    /// # Returns
    ///
    /// * `Result<f64, AppError>` - The raw Celsius reading, no rounding.
    pub async fn get_temperature(&self, city: &str) -> Result<f64, AppError> {
        let url = reqwest::Url::parse_with_params(
            &format!("{}/v1/current.json", self.base_url),
            &[("key", self.api_key.as_str()), ("q", city)],
        )
        .map_err(|e| AppError::WeatherLookup(format!("failed to build URL: {}", e)))?;

        // Redact the key from logs to prevent credential exposure.
        tracing::debug!(
            "Weather API URL: {}/v1/current.json?key=[REDACTED]&q={}",
            self.base_url,
            city
        );

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::WeatherLookup(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::WeatherLookup(format!(
                "weather provider returned status {}",
                response.status()
            )));
        }

        let weather: WeatherApiResponse = response
            .json()
            .await
            .map_err(|e| AppError::WeatherLookup(format!("failed to parse response: {}", e)))?;

        Ok(weather.current.temp_c)
    }
}
