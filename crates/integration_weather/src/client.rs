//! OpenWeatherMap client
//!
//! HTTP client for the geocoding, current weather and forecast endpoints.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{CurrentWeatherResponse, ForecastResponse, GeocodeMatch};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// The API key was missing or rejected
    #[error("Unauthorized: the API key was rejected")]
    Unauthorized,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap base URL (default: <https://api.openweathermap.org>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as the `appid` query parameter
    #[serde(default, skip_serializing)]
    pub api_key: String,

    /// Unit system: `metric`, `imperial` or `standard` (default: metric)
    #[serde(default = "default_units")]
    pub units: String,

    /// Language for condition descriptions (default: en)
    #[serde(default = "default_lang")]
    pub lang: String,

    /// Request timeout in seconds; no timeout when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org".to_string()
}

fn default_units() -> String {
    "metric".to_string()
}

fn default_lang() -> String {
    "en".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            units: default_units(),
            lang: default_lang(),
            timeout_secs: None,
        }
    }
}

impl fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("units", &self.units)
            .field("lang", &self.lang)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Look up places by name; an empty list means no match
    async fn geocode(&self, name: &str) -> Result<Vec<GeocodeMatch>, WeatherError>;

    /// Get current weather for a location
    async fn current_weather(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentWeatherResponse, WeatherError>;

    /// Get the 5 day forecast in 3-hour windows for a location
    async fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastResponse, WeatherError>;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherMapClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenWeatherMapClient {
    /// Maximum number of geocoding matches requested
    const GEOCODE_LIMIT: &'static str = "1";

    /// Create a new OpenWeatherMap client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Configuration this client was built with
    #[must_use]
    pub const fn config(&self) -> &WeatherConfig {
        &self.config
    }

    /// Validate coordinates
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url.trim_end_matches('/'))
    }

    /// Query parameters shared by the weather endpoints
    fn coordinate_params(&self, latitude: f64, longitude: f64) -> Vec<(&'static str, String)> {
        vec![
            ("lat", latitude.to_string()),
            ("lon", longitude.to_string()),
            ("units", self.config.units.clone()),
            ("lang", self.config.lang.clone()),
        ]
    }

    /// Issue a GET and decode the JSON body
    ///
    /// `appid` is appended here so that logged parameters never contain it.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<T, WeatherError> {
        let url = self.endpoint(path);
        debug!(url = %url, params = ?params, "Calling OpenWeatherMap");

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("appid", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    WeatherError::ConnectionFailed(e.to_string())
                } else {
                    WeatherError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(WeatherError::Unauthorized);
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherMapClient {
    #[instrument(skip(self))]
    async fn geocode(&self, name: &str) -> Result<Vec<GeocodeMatch>, WeatherError> {
        let params = [
            ("q", name.to_string()),
            ("limit", Self::GEOCODE_LIMIT.to_string()),
        ];
        let matches: Vec<GeocodeMatch> = self.get_json("/geo/1.0/direct", &params).await?;
        debug!(matches = matches.len(), "Geocoding finished");
        Ok(matches)
    }

    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn current_weather(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentWeatherResponse, WeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        let params = self.coordinate_params(latitude, longitude);
        self.get_json("/data/2.5/weather", &params).await
    }

    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastResponse, WeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        let params = self.coordinate_params(latitude, longitude);
        let forecast: ForecastResponse = self.get_json("/data/2.5/forecast", &params).await?;
        debug!(entries = forecast.list.len(), "Forecast received");
        Ok(forecast)
    }
}
