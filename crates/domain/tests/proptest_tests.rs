//! Property-based tests for the domain layer
//!
//! These tests use proptest to verify invariants across many random inputs.

use chrono::{DateTime, Duration, TimeZone, Utc};
use domain::{
    DayPeriod, DisplayIcon, ForecastSample, GeoLocation, Humidity, IconCode, Timezone,
    aggregate_daily, capitalize_words,
};
use proptest::prelude::*;

fn arb_icon() -> impl Strategy<Value = (IconCode, DayPeriod)> {
    (
        prop::sample::select(vec!["01", "02", "03", "04", "09", "10", "11", "13", "50"]),
        any::<bool>(),
    )
        .prop_map(|(group, day)| {
            let suffix = if day { "d" } else { "n" };
            let period = if day { DayPeriod::Day } else { DayPeriod::Night };
            (IconCode::new(format!("{group}{suffix}")), period)
        })
}

fn arb_sample(base: DateTime<Utc>) -> impl Strategy<Value = ForecastSample> {
    (
        0i64..(6 * 24 * 60),
        -40.0f64..50.0,
        -5.0f64..5.0,
        -5.0f64..5.0,
        arb_icon(),
    )
        .prop_map(move |(minutes, temperature, low, high, (icon, period))| ForecastSample {
            timestamp: base + Duration::minutes(minutes),
            temperature,
            temperature_min: temperature + low,
            temperature_max: temperature + high,
            icon,
            period,
        })
}

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 0, 0, 0).unwrap()
}

// ============================================================================
// Aggregation Property Tests
// ============================================================================

mod aggregation_tests {
    use super::*;

    proptest! {
        #[test]
        fn todays_label_never_appears(
            samples in prop::collection::vec(arb_sample(base()), 0..48),
            hour in 0u32..24
        ) {
            let now = base() + Duration::hours(i64::from(hour));
            let today = now.format("%a").to_string();
            let daily = aggregate_daily(&samples, &now);

            // samples span less than a week, so no other day shares today's label
            prop_assert!(daily.get(&today).is_none());
        }

        #[test]
        fn max_never_below_min(
            samples in prop::collection::vec(arb_sample(base()), 0..48)
        ) {
            let daily = aggregate_daily(&samples, &base());
            for summary in &daily {
                prop_assert!(summary.max >= summary.min, "{summary:?}");
            }
        }

        #[test]
        fn labels_are_unique(
            samples in prop::collection::vec(arb_sample(base()), 0..48)
        ) {
            let daily = aggregate_daily(&samples, &base());
            let mut days: Vec<_> = daily.days().collect();
            let count = days.len();
            days.sort_unstable();
            days.dedup();
            prop_assert_eq!(days.len(), count);
        }

        #[test]
        fn point_temperatures_stay_within_range(
            samples in prop::collection::vec(arb_sample(base()), 1..48)
        ) {
            let daily = aggregate_daily(&samples, &base());
            for sample in &samples {
                if sample.timestamp.date_naive() == base().date_naive() {
                    continue;
                }
                let label = sample.timestamp.format("%a").to_string();
                let summary = daily.get(&label).unwrap();
                let rounded = (sample.temperature + 0.5).floor();
                prop_assert!(f64::from(summary.min) <= rounded);
                prop_assert!(f64::from(summary.max) >= rounded);
            }
        }

        #[test]
        fn summary_icon_is_one_of_the_days_icons(
            samples in prop::collection::vec(arb_sample(base()), 1..48)
        ) {
            let daily = aggregate_daily(&samples, &base());
            for summary in &daily {
                let found = samples.iter().any(|s| {
                    s.timestamp.format("%a").to_string() == summary.day && s.icon == summary.icon_code
                });
                prop_assert!(found);
            }
        }

        #[test]
        fn zone_shift_does_not_panic(
            samples in prop::collection::vec(arb_sample(base()), 0..24),
            zone in prop::sample::select(vec!["Europe/London", "Asia/Bangkok", "America/Los_Angeles", "Africa/Nairobi"])
        ) {
            let now = Timezone::parse(zone).unwrap().localize(base());
            let daily = aggregate_daily(&samples, &now);
            prop_assert!(daily.len() <= 7);
        }
    }
}

// ============================================================================
// Icon Mapping Property Tests
// ============================================================================

mod icon_tests {
    use super::*;

    proptest! {
        #[test]
        fn arbitrary_codes_never_panic(code in ".{0,6}") {
            let _ = DisplayIcon::from_code(&code);
        }

        #[test]
        fn generated_codes_are_known((icon, _) in arb_icon()) {
            prop_assert_ne!(icon.display_icon(), DisplayIcon::Unknown);
        }
    }
}

// ============================================================================
// Text Formatting Property Tests
// ============================================================================

mod text_tests {
    use super::*;

    proptest! {
        #[test]
        fn capitalize_preserves_word_count(words in prop::collection::vec("[a-z]{1,8}", 0..6)) {
            let input = words.join(" ");
            let output = capitalize_words(&input);
            prop_assert_eq!(output.split(' ').count(), input.split(' ').count());
        }

        #[test]
        fn capitalize_is_idempotent(input in "[a-z ]{0,30}") {
            let once = capitalize_words(&input);
            prop_assert_eq!(capitalize_words(&once), once.clone());
        }

        #[test]
        fn capitalized_words_start_uppercase(words in prop::collection::vec("[a-z]{1,8}", 1..6)) {
            let output = capitalize_words(&words.join(" "));
            for word in output.split(' ') {
                prop_assert!(word.chars().next().is_some_and(char::is_uppercase));
            }
        }
    }
}

// ============================================================================
// GeoLocation Property Tests
// ============================================================================

mod geo_location_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_create_location(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let loc = GeoLocation::new(lat, lon).unwrap();
            prop_assert!((loc.latitude() - lat).abs() < f64::EPSILON);
            prop_assert!((loc.longitude() - lon).abs() < f64::EPSILON);
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ],
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }
    }
}

// ============================================================================
// Humidity Property Tests
// ============================================================================

mod humidity_tests {
    use super::*;

    proptest! {
        #[test]
        fn clamped_never_exceeds_max(value in any::<u8>()) {
            prop_assert!(Humidity::clamped(value).value() <= Humidity::MAX);
        }

        #[test]
        fn new_accepts_only_percentages(value in any::<u8>()) {
            prop_assert_eq!(Humidity::new(value).is_ok(), value <= Humidity::MAX);
        }
    }
}
