//! Application configuration
//!
//! Split into focused sub-modules:
//! - `weather`: OpenWeatherMap connection and credentials
//! - `dashboard`: city list and day-bucketing zone
//!
//! Log settings live next to the subscriber in `telemetry`.

mod dashboard;
mod weather;

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

pub use dashboard::DashboardConfig;
pub use weather::WeatherAppConfig;

use crate::telemetry::TelemetryConfig;

/// Prefix of all configuration environment variables
pub const ENV_PREFIX: &str = "WEATHER_CAROUSEL";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Weather provider configuration
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// Carousel configuration
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// The merged configuration is unusable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl AppConfig {
    /// Load configuration from defaults, a file and the environment
    ///
    /// With `path`, that file must exist. Without it, `config.toml` (or any
    /// other format the `config` crate knows) in the working directory is
    /// read if present. Environment variables override both, e.g.
    /// `WEATHER_CAROUSEL__WEATHER__API_KEY` or
    /// `WEATHER_CAROUSEL__DASHBOARD__CITIES=London,Milan`.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("weather.base_url", "https://api.openweathermap.org")?
            .set_default("weather.units", "metric")?
            .set_default("weather.lang", "en")?
            .set_default("telemetry.log_filter", "warn")?
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("dashboard.cities")
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;

        debug!(
            cities = config.dashboard.cities.len(),
            timezone = ?config.dashboard.timezone,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Reject configurations the carousel cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.weather.has_api_key() {
            return Err(ConfigError::Invalid(format!(
                "weather.api_key is required (set {ENV_PREFIX}__WEATHER__API_KEY)"
            )));
        }
        if self.dashboard.cities.is_empty() {
            return Err(ConfigError::Invalid(
                "dashboard.cities must name at least one city".to_string(),
            ));
        }
        if self.weather.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "weather.base_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::City;
    use secrecy::SecretString;

    fn with_key() -> AppConfig {
        AppConfig {
            weather: WeatherAppConfig {
                api_key: SecretString::from("key".to_string()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn default_config_needs_a_key() {
        let err = AppConfig::default().validate().unwrap_err();
        assert!(err.to_string().contains("weather.api_key"));
    }

    #[test]
    fn config_with_key_is_valid() {
        assert!(with_key().validate().is_ok());
    }

    #[test]
    fn empty_city_list_is_invalid() {
        let mut config = with_key();
        config.dashboard.cities.clear();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn empty_base_url_is_invalid() {
        let mut config = with_key();
        config.weather.base_url = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn debug_output_hides_key() {
        let debug = format!("{:?}", with_key());
        assert!(debug.contains("[REDACTED]"));
        assert!(debug.contains("dashboard"));
    }

    #[test]
    fn default_dashboard_lists_every_city() {
        assert_eq!(AppConfig::default().dashboard.cities, City::ALL.to_vec());
    }
}
