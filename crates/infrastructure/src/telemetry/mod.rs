//! Logging infrastructure
//!
//! Installs the global `tracing` subscriber. Output goes to stderr so that
//! rendered slides on stdout stay clean.

mod logging;

pub use logging::{TelemetryConfig, TelemetryError, init_tracing};
