//! Forecast samples and their daily summaries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{DayPeriod, IconCode};

/// One 3-hour forecast record from the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    pub timestamp: DateTime<Utc>,
    /// Point temperature for the window
    pub temperature: f64,
    pub temperature_min: f64,
    pub temperature_max: f64,
    pub icon: IconCode,
    pub period: DayPeriod,
}

/// Aggregated min/max/icon for one future calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecastSummary {
    /// Short weekday label, e.g. `Mon`
    pub day: String,
    pub icon_code: IconCode,
    pub max: i32,
    pub min: i32,
}

/// Daily summaries in the order their day was first seen
///
/// Serializes as a plain array of summaries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailyForecasts(Vec<DailyForecastSummary>);

impl DailyForecasts {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Look up the summary for a day label
    #[must_use]
    pub fn get(&self, day: &str) -> Option<&DailyForecastSummary> {
        self.0.iter().find(|summary| summary.day == day)
    }

    pub(crate) fn get_mut(&mut self, day: &str) -> Option<&mut DailyForecastSummary> {
        self.0.iter_mut().find(|summary| summary.day == day)
    }

    pub(crate) fn push(&mut self, summary: DailyForecastSummary) {
        self.0.push(summary);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DailyForecastSummary> {
        self.0.iter()
    }

    /// Day labels in insertion order
    pub fn days(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|summary| summary.day.as_str())
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<DailyForecastSummary> {
        self.0
    }
}

impl<'a> IntoIterator for &'a DailyForecasts {
    type Item = &'a DailyForecastSummary;
    type IntoIter = std::slice::Iter<'a, DailyForecastSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
