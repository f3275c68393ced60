//! Weather provider configuration

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// OpenWeatherMap connection settings
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key, sent as the `appid` query parameter
    ///
    /// Sensitive - uses `SecretString`. Usually supplied through
    /// `WEATHER_CAROUSEL__WEATHER__API_KEY`.
    #[serde(default = "empty_secret", skip_serializing)]
    pub api_key: SecretString,

    /// Unit system (`metric`, `imperial` or `standard`)
    #[serde(default = "default_units")]
    pub units: String,

    /// Language of the condition descriptions
    #[serde(default = "default_lang")]
    pub lang: String,

    /// Per-request timeout; unset means no timeout
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl std::fmt::Debug for WeatherAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAppConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("units", &self.units)
            .field("lang", &self.lang)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
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

fn empty_secret() -> SecretString {
    SecretString::from(String::new())
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: empty_secret(),
            units: default_units(),
            lang: default_lang(),
            timeout_secs: None,
        }
    }
}

impl WeatherAppConfig {
    /// Convert to `integration_weather` config
    #[must_use]
    pub fn to_client_config(&self) -> integration_weather::WeatherConfig {
        integration_weather::WeatherConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key.expose_secret().to_string(),
            units: self.units.clone(),
            lang: self.lang.clone(),
            timeout_secs: self.timeout_secs,
        }
    }

    /// Whether an API key has been supplied
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.expose_secret().trim().is_empty()
    }
}
