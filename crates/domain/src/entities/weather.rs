//! Resolved locations and current conditions

use serde::{Deserialize, Serialize};

use crate::value_objects::{GeoLocation, Humidity, IconCode};

/// Result of geo resolution: coordinates plus the provider's canonical name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub location: GeoLocation,
    pub name: String,
}

impl ResolvedLocation {
    #[must_use]
    pub fn new(location: GeoLocation, name: impl Into<String>) -> Self {
        Self {
            location,
            name: name.into(),
        }
    }
}

/// Normalized current conditions for one location
///
/// Temperatures are whole degrees in the configured unit system,
/// wind speed is in the provider's unit (m/s for metric) and visibility
/// is in kilometres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWeather {
    pub location: String,
    pub description: String,
    pub temperature: i32,
    pub temperature_min: i32,
    pub temperature_max: i32,
    pub icon: IconCode,
    pub humidity: Humidity,
    pub wind_speed: f64,
    pub visibility_km: f64,
}
