//! OpenWeatherMap integration
//!
//! Client for the OpenWeatherMap APIs (<https://openweathermap.org/api>):
//! direct geocoding, current weather and the 5 day / 3 hour forecast.
//! Every request carries the configured API key, unit system and language.

pub mod client;
mod models;

pub use client::{OpenWeatherMapClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::{
    CurrentWeatherResponse, ForecastCity, ForecastEntry, ForecastResponse, ForecastSys,
    GeocodeMatch, MainBlock, WeatherDescriptor, Wind,
};
