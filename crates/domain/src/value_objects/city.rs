//! City roster
//!
//! The carousel shows a fixed, ordered set of cities. Each city knows its
//! display name (also used as the geocoding query) and its background image.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// One of the cities shown by the carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    London,
    Milan,
    Bangkok,
    LosAngeles,
    Nairobi,
}

impl City {
    /// Every city in carousel order
    pub const ALL: [Self; 5] = [
        Self::London,
        Self::Milan,
        Self::Bangkok,
        Self::LosAngeles,
        Self::Nairobi,
    ];

    /// The city whose background is shown before any slide is observed
    pub const DEFAULT: Self = Self::London;

    /// Display name, also sent as the geocoding query
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::London => "London",
            Self::Milan => "Milan",
            Self::Bangkok => "Bangkok",
            Self::LosAngeles => "Los Angeles",
            Self::Nairobi => "Nairobi",
        }
    }

    /// Relative path of the slide background image
    #[must_use]
    pub const fn background_image(self) -> &'static str {
        match self {
            Self::London => "./img/london.webp",
            Self::Milan => "./img/duomo-milano.jpg",
            Self::Bangkok => "./img/bangkok.jpg",
            Self::LosAngeles => "./img/los-angeles.webp",
            Self::Nairobi => "./img/nairobi.webp",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|city| city.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::unknown_city(wanted))
    }
}

impl Serialize for City {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for City {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_order_is_fixed() {
        let names: Vec<_> = City::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            ["London", "Milan", "Bangkok", "Los Angeles", "Nairobi"]
        );
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("los angeles".parse::<City>().unwrap(), City::LosAngeles);
        assert_eq!("  MILAN ".parse::<City>().unwrap(), City::Milan);
    }

    #[test]
    fn unknown_city_is_rejected() {
        let err = "Atlantis".parse::<City>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown city: Atlantis");
    }

    #[test]
    fn every_city_has_a_background() {
        for city in City::ALL {
            assert!(city.background_image().starts_with("./img/"));
        }
        assert_eq!(City::DEFAULT.background_image(), "./img/london.webp");
        assert_eq!(City::Milan.background_image(), "./img/duomo-milano.jpg");
        assert_eq!(City::Nairobi.background_image(), "./img/nairobi.webp");
    }

    #[test]
    fn serde_uses_display_name() {
        let json = serde_json::to_string(&City::LosAngeles).unwrap();
        assert_eq!(json, "\"Los Angeles\"");
        let back: City = serde_json::from_str("\"Nairobi\"").unwrap();
        assert_eq!(back, City::Nairobi);
    }
}
