//! Slide state machine
//!
//! Each carousel slide starts out pending and settles exactly once, either
//! populated with weather data or errored. Settled slides never change again.

use domain::{City, CurrentWeather, DailyForecasts};
use serde::Serialize;

/// Everything a populated slide displays
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlideData {
    pub current: CurrentWeather,
    pub forecast: DailyForecasts,
}

/// Lifecycle of a single slide
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SlideState {
    /// Data is still loading
    Pending,
    /// Data loaded; terminal
    Populated(Box<SlideData>),
    /// Loading failed; terminal
    Errored { message: String },
}

impl SlideState {
    /// Errored state carrying the per-city failure message
    #[must_use]
    pub fn errored(city: City) -> Self {
        Self::Errored {
            message: format!("Error loading slide data for city: {city}"),
        }
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !self.is_pending()
    }
}

/// Current state of the slide at `index`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlideSnapshot {
    pub index: usize,
    pub city: City,
    pub state: SlideState,
}

impl SlideSnapshot {
    #[must_use]
    pub const fn pending(index: usize, city: City) -> Self {
        Self {
            index,
            city,
            state: SlideState::Pending,
        }
    }

    /// Move a pending slide into a terminal state
    ///
    /// Returns `false` and leaves the slide untouched if it has already
    /// settled or if `state` is not terminal.
    pub fn settle(&mut self, state: SlideState) -> bool {
        if self.state.is_terminal() || state.is_pending() {
            return false;
        }
        self.state = state;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{Humidity, IconCode};

    fn data() -> SlideData {
        SlideData {
            current: CurrentWeather {
                location: "London".to_string(),
                description: "Light Rain".to_string(),
                temperature: 12,
                temperature_min: 10,
                temperature_max: 14,
                icon: IconCode::new("10d"),
                humidity: Humidity::clamped(81),
                wind_speed: 5.1,
                visibility_km: 9.0,
            },
            forecast: DailyForecasts::new(),
        }
    }

    #[test]
    fn pending_to_populated() {
        let mut slide = SlideSnapshot::pending(0, City::London);
        assert!(slide.settle(SlideState::Populated(Box::new(data()))));
        assert!(matches!(slide.state, SlideState::Populated(_)));
    }

    #[test]
    fn terminal_states_are_never_left() {
        let mut slide = SlideSnapshot::pending(1, City::Milan);
        assert!(slide.settle(SlideState::errored(City::Milan)));

        assert!(!slide.settle(SlideState::Populated(Box::new(data()))));
        assert!(!slide.settle(SlideState::Pending));
        assert_eq!(slide.state, SlideState::errored(City::Milan));
    }

    #[test]
    fn settling_to_pending_is_rejected() {
        let mut slide = SlideSnapshot::pending(2, City::Bangkok);
        assert!(!slide.settle(SlideState::Pending));
        assert!(slide.state.is_pending());
    }

    #[test]
    fn error_message_names_the_city() {
        let SlideState::Errored { message } = SlideState::errored(City::LosAngeles) else {
            panic!("expected errored state");
        };
        assert_eq!(message, "Error loading slide data for city: Los Angeles");
    }

    #[test]
    fn state_serializes_with_status_tag() {
        let json = serde_json::to_value(SlideState::errored(City::Nairobi)).unwrap();
        assert_eq!(json["status"], "errored");
        assert_eq!(json["message"], "Error loading slide data for city: Nairobi");

        let json = serde_json::to_value(SlideState::Pending).unwrap();
        assert_eq!(json["status"], "pending");
    }
}
