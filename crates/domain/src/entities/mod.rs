//! Domain entities - weather snapshots produced per city

mod forecast;
mod weather;

pub use forecast::{DailyForecastSummary, DailyForecasts, ForecastSample};
pub use weather::{CurrentWeather, ResolvedLocation};
