//! Provider icon codes
//!
//! Codes follow the `NNx` pattern where `x` is `d` (day) or `n` (night).
//! Codes are kept verbatim, unknown ones included, so that the icon mapper
//! can fall back to its unknown icon instead of failing ingestion.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::DisplayIcon;

/// Raw icon code as delivered by the weather provider
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconCode(String);

impl IconCode {
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the code denotes a night-time icon (`n` suffix)
    #[must_use]
    pub fn is_night(&self) -> bool {
        self.0.ends_with('n')
    }

    #[must_use]
    pub fn display_icon(&self) -> DisplayIcon {
        DisplayIcon::from_code(&self.0)
    }
}

impl fmt::Display for IconCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IconCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// Part of day a forecast sample belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPeriod {
    Day,
    Night,
}

impl DayPeriod {
    /// Map the provider's `pod` flag; only `"d"` is daytime
    #[must_use]
    pub fn from_pod(pod: &str) -> Self {
        if pod == "d" { Self::Day } else { Self::Night }
    }

    #[must_use]
    pub const fn is_day(self) -> bool {
        matches!(self, Self::Day)
    }
}
