//! Weather adapter - Implements WeatherPort using integration_weather
//!
//! Normalizes OpenWeatherMap payloads into domain types. Client errors are
//! logged and reported to the application as absence.

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use chrono::DateTime;
use domain::{
    CurrentWeather, DayPeriod, ForecastSample, GeoLocation, Humidity, IconCode, ResolvedLocation,
    capitalize_words, round_half_up,
};
use integration_weather::{
    CurrentWeatherResponse, ForecastEntry, GeocodeMatch, OpenWeatherMapClient, WeatherClient,
    WeatherConfig,
};
use tracing::{debug, instrument, warn};

/// Adapter for weather services using the OpenWeatherMap API
pub struct WeatherAdapter {
    client: Box<dyn WeatherClient>,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter").finish_non_exhaustive()
    }
}

impl WeatherAdapter {
    /// Create an adapter backed by an OpenWeatherMap client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = OpenWeatherMapClient::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self::with_client(client))
    }

    /// Wrap an existing client
    pub fn with_client(client: impl WeatherClient + 'static) -> Self {
        Self {
            client: Box::new(client),
        }
    }

    fn map_location(found: &GeocodeMatch) -> Option<ResolvedLocation> {
        match GeoLocation::new(found.lat, found.lon) {
            Ok(location) => Some(ResolvedLocation::new(location, found.name.clone())),
            Err(e) => {
                warn!(error = %e, name = %found.name, "Geocoding returned invalid coordinates");
                None
            },
        }
    }

    /// Normalize current conditions; a payload without a weather
    /// descriptor is treated as incomplete
    fn map_current(location: &str, response: &CurrentWeatherResponse) -> Option<CurrentWeather> {
        let descriptor = response.descriptor()?;

        Some(CurrentWeather {
            location: location.to_string(),
            description: capitalize_words(&descriptor.description),
            temperature: round_half_up(response.main.temp),
            temperature_min: round_half_up(response.main.temp_min),
            temperature_max: round_half_up(response.main.temp_max),
            icon: IconCode::new(descriptor.icon.as_str()),
            humidity: Humidity::clamped(response.main.humidity),
            wind_speed: response.wind.speed,
            visibility_km: response
                .visibility
                .map_or(0.0, |metres| f64::from(metres) / 1000.0),
        })
    }

    fn map_sample(entry: &ForecastEntry) -> Option<ForecastSample> {
        let Some(timestamp) = DateTime::from_timestamp(entry.dt, 0) else {
            debug!(dt = entry.dt, "Skipping forecast entry with invalid timestamp");
            return None;
        };

        Some(ForecastSample {
            timestamp,
            temperature: entry.main.temp,
            temperature_min: entry.main.temp_min,
            temperature_max: entry.main.temp_max,
            icon: entry
                .descriptor()
                .map(|descriptor| IconCode::new(descriptor.icon.as_str()))
                .unwrap_or_default(),
            period: DayPeriod::from_pod(&entry.sys.pod),
        })
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self))]
    async fn resolve_city(&self, name: &str) -> Option<ResolvedLocation> {
        let matches = match self.client.geocode(name).await {
            Ok(matches) => matches,
            Err(e) => {
                warn!(error = %e, "Geocoding failed");
                return None;
            },
        };

        let Some(first) = matches.first() else {
            warn!("Geocoding found no match");
            return None;
        };

        let resolved = Self::map_location(first)?;
        debug!(name = %resolved.name, location = %resolved.location, "Resolved city");
        Some(resolved)
    }

    #[instrument(skip(self, location), fields(location = %location.name))]
    async fn current_weather(&self, location: &ResolvedLocation) -> Option<CurrentWeather> {
        let coordinates = &location.location;
        let response = match self
            .client
            .current_weather(coordinates.latitude(), coordinates.longitude())
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Failed to get current weather");
                return None;
            },
        };

        let current = Self::map_current(&location.name, &response);
        match &current {
            Some(current) => debug!(
                temperature = current.temperature,
                icon = %current.icon,
                "Retrieved current weather"
            ),
            None => warn!("Current weather payload has no weather descriptor"),
        }
        current
    }

    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn forecast(&self, location: &GeoLocation) -> Option<Vec<ForecastSample>> {
        let response = match self
            .client
            .forecast(location.latitude(), location.longitude())
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Failed to get forecast");
                return None;
            },
        };

        let samples: Vec<_> = response.list.iter().filter_map(Self::map_sample).collect();
        debug!(samples = samples.len(), "Retrieved forecast");
        Some(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use integration_weather::{ForecastSys, MainBlock, WeatherDescriptor, Wind};

    fn main_block(temp: f64) -> MainBlock {
        MainBlock {
            temp,
            feels_like: None,
            temp_min: temp - 1.5,
            temp_max: temp + 1.5,
            pressure: None,
            humidity: 64,
        }
    }

    fn descriptor(description: &str, icon: &str) -> WeatherDescriptor {
        WeatherDescriptor {
            id: 500,
            main: "Rain".to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
        }
    }

    fn current_response() -> CurrentWeatherResponse {
        CurrentWeatherResponse {
            weather: vec![descriptor("light rain", "10d")],
            main: main_block(12.5),
            wind: Wind {
                speed: 5.66,
                deg: Some(250.0),
                gust: None,
            },
            visibility: Some(7500),
            name: "City of London".to_string(),
            dt: 1_760_608_800,
            timezone: Some(3600),
        }
    }

    #[test]
    fn adapter_debug_output() {
        let adapter = WeatherAdapter::with_config(WeatherConfig::default()).unwrap();
        assert!(format!("{adapter:?}").contains("WeatherAdapter"));
    }

    #[test]
    fn map_current_normalizes_fields() {
        let current = WeatherAdapter::map_current("London", &current_response()).unwrap();

        assert_eq!(current.location, "London");
        assert_eq!(current.description, "Light Rain");
        assert_eq!(current.temperature, 13);
        assert_eq!(current.temperature_min, 11);
        assert_eq!(current.temperature_max, 14);
        assert_eq!(current.icon.as_str(), "10d");
        assert_eq!(current.humidity.value(), 64);
        assert!((current.visibility_km - 7.5).abs() < f64::EPSILON);
        assert!((current.wind_speed - 5.66).abs() < f64::EPSILON);
    }

    #[test]
    fn map_current_without_visibility_reports_zero() {
        let mut response = current_response();
        response.visibility = None;

        let current = WeatherAdapter::map_current("London", &response).unwrap();
        assert!(current.visibility_km.abs() < f64::EPSILON);
    }

    #[test]
    fn map_current_without_descriptor_is_absent() {
        let mut response = current_response();
        response.weather.clear();

        assert!(WeatherAdapter::map_current("London", &response).is_none());
    }

    #[test]
    fn map_sample_reads_pod_flag() {
        let entry = ForecastEntry {
            dt: 1_760_659_200,
            main: main_block(8.0),
            weather: vec![descriptor("clear sky", "01n")],
            wind: Wind::default(),
            visibility: None,
            sys: ForecastSys {
                pod: "n".to_string(),
            },
            dt_txt: None,
        };

        let sample = WeatherAdapter::map_sample(&entry).unwrap();
        assert_eq!(sample.period, DayPeriod::Night);
        assert_eq!(sample.icon.as_str(), "01n");
        assert_eq!(sample.timestamp.timestamp(), 1_760_659_200);
        assert!((sample.temperature_min - 6.5).abs() < f64::EPSILON);
    }

    #[test]
    fn map_sample_without_descriptor_gets_empty_icon() {
        let entry = ForecastEntry {
            dt: 1_760_670_000,
            main: main_block(20.0),
            weather: Vec::new(),
            wind: Wind::default(),
            visibility: None,
            sys: ForecastSys {
                pod: "d".to_string(),
            },
            dt_txt: None,
        };

        let sample = WeatherAdapter::map_sample(&entry).unwrap();
        assert_eq!(sample.icon.as_str(), "");
        assert_eq!(sample.period, DayPeriod::Day);
    }

    #[test]
    fn map_location_rejects_out_of_range_coordinates() {
        let bad = GeocodeMatch {
            name: "Nowhere".to_string(),
            lat: 123.0,
            lon: 0.0,
            country: None,
            state: None,
        };
        assert!(WeatherAdapter::map_location(&bad).is_none());

        let good = GeocodeMatch {
            name: "Milan".to_string(),
            lat: 45.4642,
            lon: 9.19,
            country: Some("IT".to_string()),
            state: None,
        };
        let resolved = WeatherAdapter::map_location(&good).unwrap();
        assert_eq!(resolved.name, "Milan");
    }
}
