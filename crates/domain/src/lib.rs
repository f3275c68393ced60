//! Domain layer for the weather carousel
//!
//! Contains the city roster, weather entities, value objects, the forecast
//! aggregation rules and the pure formatting helpers. This layer performs no
//! I/O and defines the ubiquitous language shared by the other crates.

pub mod aggregation;
pub mod entities;
pub mod errors;
pub mod text;
pub mod value_objects;

pub use aggregation::{aggregate_daily, round_half_up};
pub use entities::*;
pub use errors::DomainError;
pub use text::capitalize_words;
pub use value_objects::*;
