//! Display icons
//!
//! Lookup table from provider icon codes to the icons the carousel renders.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Icon shown for a weather condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayIcon {
    /// Clear sky, day (01d)
    Sun,
    /// Clear sky, night (01n)
    Moon,
    /// Few clouds, day (02d)
    CloudSun,
    /// Few clouds, night (02n)
    CloudMoon,
    /// Scattered or broken clouds (03x, 04x)
    Cloud,
    /// Shower rain (09x)
    CloudShowersHeavy,
    /// Rain, day (10d)
    CloudSunRain,
    /// Rain, night (10n)
    CloudMoonRain,
    /// Thunderstorm (11x)
    Bolt,
    /// Snow (13x)
    Snowflake,
    /// Mist (50x)
    Smog,
    /// Anything the table does not know
    Unknown,
}

impl DisplayIcon {
    /// Map a provider icon code; unknown or empty codes map to `Unknown`
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "01d" => Self::Sun,
            "01n" => Self::Moon,
            "02d" => Self::CloudSun,
            "02n" => Self::CloudMoon,
            "03d" | "03n" | "04d" | "04n" => Self::Cloud,
            "09d" | "09n" => Self::CloudShowersHeavy,
            "10d" => Self::CloudSunRain,
            "10n" => Self::CloudMoonRain,
            "11d" | "11n" => Self::Bolt,
            "13d" | "13n" => Self::Snowflake,
            "50d" | "50n" => Self::Smog,
            _ => Self::Unknown,
        }
    }

    /// Font Awesome class list for HTML renderers
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Sun => "fas fa-sun",
            Self::Moon => "fas fa-moon",
            Self::CloudSun => "fas fa-cloud-sun",
            Self::CloudMoon => "fas fa-cloud-moon",
            Self::Cloud => "fas fa-cloud",
            Self::CloudShowersHeavy => "fas fa-cloud-showers-heavy",
            Self::CloudSunRain => "fas fa-cloud-sun-rain",
            Self::CloudMoonRain => "fas fa-cloud-moon-rain",
            Self::Bolt => "fas fa-bolt",
            Self::Snowflake => "fas fa-snowflake",
            Self::Smog => "fas fa-smog",
            Self::Unknown => "fas fa-question",
        }
    }

    /// Glyph for terminal renderers
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Sun => "☀️",
            Self::Moon => "🌙",
            Self::CloudSun => "⛅",
            Self::CloudMoon | Self::Cloud => "☁️",
            Self::CloudShowersHeavy | Self::CloudMoonRain => "🌧️",
            Self::CloudSunRain => "🌦️",
            Self::Bolt => "⚡",
            Self::Snowflake => "❄️",
            Self::Smog => "🌫️",
            Self::Unknown => "❓",
        }
    }
}

impl fmt::Display for DisplayIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}
