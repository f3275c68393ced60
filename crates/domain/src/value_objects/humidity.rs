//! Relative humidity value object
//!
//! The provider reports humidity as an integer percentage. Values above 100
//! are clamped on ingestion so rendering never shows an impossible reading.
//!
//! ```
//! use domain::value_objects::Humidity;
//!
//! let h = Humidity::new(81).expect("valid humidity");
//! assert_eq!(h.to_string(), "81%");
//! assert_eq!(Humidity::clamped(130).value(), 100);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when a humidity value is out of range
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("invalid humidity: {0}% is out of range (must be 0-100)")]
pub struct InvalidHumidity(u8);

/// Relative humidity percentage (0-100%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Humidity(u8);

impl Humidity {
    pub const MAX: u8 = 100;

    /// Create a validated humidity value
    ///
    /// # Errors
    ///
    /// Returns `InvalidHumidity` if the value is greater than 100.
    pub const fn new(value: u8) -> Result<Self, InvalidHumidity> {
        if value > Self::MAX {
            Err(InvalidHumidity(value))
        } else {
            Ok(Self(value))
        }
    }

    /// Create a humidity value, clamping anything above 100
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Humidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl<'de> Deserialize<'de> for Humidity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
