//! Tracing subscriber setup

use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for log output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Log level filter (e.g., "warn", "infrastructure=debug,integration_weather=trace")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Emit one JSON object per event instead of human-readable lines
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            json: false,
        }
    }
}

impl TelemetryConfig {
    /// Filter precedence: `RUST_LOG`, then `filter_override`, then the config
    fn env_filter(&self, filter_override: Option<&str>) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(filter_override.unwrap_or(&self.log_filter))
        })
    }
}

/// Install the global subscriber
///
/// `filter_override` replaces the configured filter, e.g. when verbosity
/// flags were given on the command line.
///
/// # Errors
///
/// Returns `TelemetryError::Init` if a global subscriber is already set.
pub fn init_tracing(
    config: &TelemetryConfig,
    filter_override: Option<&str>,
) -> Result<(), TelemetryError> {
    let env_filter = config.env_filter(filter_override);

    if config.json {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| TelemetryError::Init(e.to_string()))?;
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_line_number(true);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| TelemetryError::Init(e.to_string()))?;
    }

    debug!(json = config.json, "Tracing initialized");
    Ok(())
}

/// Error type for telemetry initialization
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Failed to initialize tracing subscriber
    #[error("Failed to initialize tracing: {0}")]
    Init(String),
}
