//! Daily forecast aggregation
//!
//! The provider delivers forecasts in 3-hour windows. The carousel shows one
//! row per upcoming day, so the windows are folded into a daily min/max and a
//! representative icon. Samples falling on the current calendar day are
//! skipped; only future days are summarized.

use chrono::{DateTime, TimeZone};
use std::fmt;

use crate::entities::{DailyForecastSummary, DailyForecasts, ForecastSample};

/// Fold 3-hour samples into one summary per future day
///
/// `now` fixes both the aggregation time and the time zone in which sample
/// timestamps are bucketed into calendar days. Day labels are English short
/// weekdays (`Mon`, `Tue`, ...) and the result keeps the order in which each
/// label was first encountered.
///
/// For every day the summary is seeded from the first sample's own min/max
/// and then widened with each sample's point temperature. The icon of the
/// first sample is kept unless it is a night icon and a daytime sample
/// arrives later, in which case that sample's icon replaces it once.
pub fn aggregate_daily<Tz>(samples: &[ForecastSample], now: &DateTime<Tz>) -> DailyForecasts
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let zone = now.timezone();
    let today = now.date_naive();
    let mut daily = DailyForecasts::new();

    for sample in samples {
        let local = sample.timestamp.with_timezone(&zone);
        if local.date_naive() == today {
            continue;
        }

        let day = local.format("%a").to_string();
        if daily.get(&day).is_none() {
            daily.push(seed(day.clone(), sample));
        }
        if let Some(summary) = daily.get_mut(&day) {
            widen(summary, sample);
        }
    }

    daily
}

fn seed(day: String, sample: &ForecastSample) -> DailyForecastSummary {
    let low = round_half_up(sample.temperature_min);
    let high = round_half_up(sample.temperature_max);

    DailyForecastSummary {
        day,
        icon_code: sample.icon.clone(),
        max: low.max(high),
        min: low.min(high),
    }
}

fn widen(summary: &mut DailyForecastSummary, sample: &ForecastSample) {
    let temperature = round_half_up(sample.temperature);
    summary.max = summary.max.max(temperature);
    summary.min = summary.min.min(temperature);

    if summary.icon_code.is_night() && sample.period.is_day() {
        summary.icon_code = sample.icon.clone();
    }
}

/// Round to the nearest integer with halves going up (`-2.5` becomes `-2`)
#[allow(clippy::cast_possible_truncation)]
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}
