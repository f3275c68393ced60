//! Timezone value object
//!
//! Decides which calendar day counts as "today" when daily forecasts are
//! aggregated. Backed by the IANA database from `chrono-tz`.

use chrono::{DateTime, FixedOffset, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// A validated IANA timezone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timezone(Tz);

impl Timezone {
    /// Parse an IANA timezone name such as `Europe/Rome`
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimezone` for names unknown to the
    /// IANA database.
    pub fn parse(name: &str) -> Result<Self, DomainError> {
        name.parse::<Tz>()
            .map(Self)
            .map_err(|_| DomainError::InvalidTimezone(name.to_string()))
    }

    #[must_use]
    pub const fn utc() -> Self {
        Self(Tz::UTC)
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    #[must_use]
    pub const fn tz(&self) -> Tz {
        self.0
    }

    /// Express an instant as wall-clock time in this zone
    #[must_use]
    pub fn localize(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        instant.with_timezone(&self.0).fixed_offset()
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self::utc()
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Timezone {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Timezone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::parse(&name).map_err(serde::de::Error::custom)
    }
}
