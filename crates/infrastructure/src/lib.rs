//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the OpenWeatherMap
//! weather adapter and the system clock. Also owns configuration loading
//! and tracing setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, ConfigError, DashboardConfig, ENV_PREFIX, WeatherAppConfig};
pub use telemetry::{TelemetryConfig, TelemetryError, init_tracing};
