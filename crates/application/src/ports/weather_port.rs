//! Weather service port
//!
//! Defines the interface for weather data retrieval. Every operation reports
//! failure as absence so that callers can degrade one slide at a time.

use async_trait::async_trait;
use domain::{CurrentWeather, ForecastSample, GeoLocation, ResolvedLocation};
#[cfg(test)]
use mockall::automock;

/// Port for weather service operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Resolve a city name to coordinates and the provider's canonical name
    ///
    /// Returns `None` when nothing matches or the lookup fails.
    async fn resolve_city(&self, name: &str) -> Option<ResolvedLocation>;

    /// Normalized current conditions at a resolved location
    ///
    /// The location's canonical name becomes the `location` of the result.
    async fn current_weather(&self, location: &ResolvedLocation) -> Option<CurrentWeather>;

    /// Raw 3-hour forecast samples for a coordinate, in provider order
    async fn forecast(&self, location: &GeoLocation) -> Option<Vec<ForecastSample>>;
}
