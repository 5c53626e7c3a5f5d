use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub weather_api_key: String,
    pub weather_base_url: String,
    pub brasilapi_base_url: String,
    pub viacep_base_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            weather_api_key: std::env::var("WEATHER_API_KEY")
                .map_err(|_| anyhow::anyhow!("WEATHER_API_KEY environment variable required"))
                .and_then(|key| {
                    if key.trim().is_empty() {
                        anyhow::bail!("WEATHER_API_KEY cannot be empty");
                    }
                    Ok(key)
                })?,
            weather_base_url: base_url_var("WEATHER_API_BASE_URL", "https://api.weatherapi.com")?,
            brasilapi_base_url: base_url_var("BRASILAPI_BASE_URL", "https://brasilapi.com.br")?,
            viacep_base_url: base_url_var("VIACEP_BASE_URL", "https://viacep.com.br")?,
        };

        // Log successful configuration load (without sensitive values)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("BrasilAPI base URL: {}", config.brasilapi_base_url);
        tracing::debug!("ViaCEP base URL: {}", config.viacep_base_url);
        tracing::debug!("Weather API base URL: {}", config.weather_base_url);
        tracing::debug!("Server Port: {}", config.port);

        Ok(config)
    }
}

fn base_url_var(name: &str, default: &str) -> anyhow::Result<String> {
    let url = std::env::var(name).unwrap_or_else(|_| default.to_string());
    if url.trim().is_empty() {
        anyhow::bail!("{} cannot be empty", name);
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        anyhow::bail!("{} must start with http:// or https://", name);
    }
    // Trailing slashes would double up when joined with endpoint paths.
    Ok(url.trim_end_matches('/').to_string())
}
