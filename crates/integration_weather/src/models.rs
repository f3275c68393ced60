//! OpenWeatherMap response models
//!
//! Only the fields the carousel consumes are modelled; everything else in the
//! provider payload is ignored during deserialization.

use serde::{Deserialize, Serialize};

/// One match from the direct geocoding endpoint (`/geo/1.0/direct`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeMatch {
    /// Canonical place name as known to the provider
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    /// ISO 3166 country code
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

/// Weather descriptor shared by current and forecast payloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherDescriptor {
    /// Provider condition id (e.g. 800 for clear sky)
    #[serde(default)]
    pub id: u32,
    /// Condition group (`Clear`, `Clouds`, `Rain`, ...)
    #[serde(default)]
    pub main: String,
    /// Localized free-text description, lower case
    #[serde(default)]
    pub description: String,
    /// Icon code such as `10d`
    #[serde(default)]
    pub icon: String,
}

/// Temperature block (`main`) of a current or forecast payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainBlock {
    pub temp: f64,
    #[serde(default)]
    pub feels_like: Option<f64>,
    pub temp_min: f64,
    pub temp_max: f64,
    #[serde(default)]
    pub pressure: Option<f64>,
    #[serde(default)]
    pub humidity: u8,
}

/// Wind block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    #[serde(default)]
    pub speed: f64,
    #[serde(default)]
    pub deg: Option<f64>,
    #[serde(default)]
    pub gust: Option<f64>,
}

/// Response of `/data/2.5/weather`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeatherResponse {
    /// Usually a single element; empty when the provider has no descriptor
    #[serde(default)]
    pub weather: Vec<WeatherDescriptor>,
    pub main: MainBlock,
    #[serde(default)]
    pub wind: Wind,
    /// Visibility in metres, capped by the provider at 10 km
    #[serde(default)]
    pub visibility: Option<u32>,
    /// Provider's name for the station area
    #[serde(default)]
    pub name: String,
    /// Observation time, unix seconds
    #[serde(default)]
    pub dt: i64,
    /// Shift from UTC in seconds
    #[serde(default)]
    pub timezone: Option<i32>,
}

impl CurrentWeatherResponse {
    /// First weather descriptor, if any
    #[must_use]
    pub fn descriptor(&self) -> Option<&WeatherDescriptor> {
        self.weather.first()
    }
}

/// Day/night marker on forecast entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastSys {
    /// `d` for day, `n` for night
    #[serde(default)]
    pub pod: String,
}

/// One 3-hour window of `/data/2.5/forecast`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Window start, unix seconds (UTC)
    pub dt: i64,
    pub main: MainBlock,
    #[serde(default)]
    pub weather: Vec<WeatherDescriptor>,
    #[serde(default)]
    pub wind: Wind,
    #[serde(default)]
    pub visibility: Option<u32>,
    pub sys: ForecastSys,
    #[serde(default)]
    pub dt_txt: Option<String>,
}

impl ForecastEntry {
    /// First weather descriptor, if any
    #[must_use]
    pub fn descriptor(&self) -> Option<&WeatherDescriptor> {
        self.weather.first()
    }
}

/// City block of the forecast response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastCity {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    /// Shift from UTC in seconds
    #[serde(default)]
    pub timezone: Option<i32>,
}

/// Response of `/data/2.5/forecast`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    /// Number of entries returned
    #[serde(default)]
    pub cnt: u32,
    pub list: Vec<ForecastEntry>,
    #[serde(default)]
    pub city: ForecastCity,
}
