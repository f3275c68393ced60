//! Application layer - Use cases and orchestration
//!
//! Contains the weather and clock ports, the per-city slide loader, the
//! carousel controller and the view models. Orchestrates domain objects and
//! infrastructure adapters.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
