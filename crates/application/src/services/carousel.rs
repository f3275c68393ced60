//! Carousel controller
//!
//! Tracks which slide is active, which pagination dot has focus and which
//! background image to show. The controller is a plain state machine: the
//! presentation layer feeds it visibility and keyboard events and acts on the
//! returned requests.

use domain::City;
use serde::Serialize;

use crate::error::ApplicationError;

/// Share of a slide that must be visible for it to become active
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

/// Request to bring a slide into view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScrollRequest {
    pub index: usize,
    pub smooth: bool,
}

/// Keys the carousel reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowRight,
    ArrowLeft,
    Tab,
    ShiftTab,
    Other,
}

/// Result of feeding a key to the carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The active slide changed; scroll it into view
    Navigate(ScrollRequest),
    /// Focus moved to another pagination dot
    ///
    /// `default_prevented` is set when the carousel overrode the normal tab
    /// order to wrap around.
    Focus {
        index: usize,
        default_prevented: bool,
    },
    /// The key is not handled by the carousel
    Ignored,
}

/// Render model of one pagination control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationDot {
    pub index: usize,
    /// Accessible label, e.g. `Go to Milan weather slide`
    pub label: String,
    pub active: bool,
    pub focused: bool,
}

/// Active-slide tracking and keyboard navigation
#[derive(Debug, Clone)]
pub struct Carousel {
    cities: Vec<City>,
    active: usize,
    focused: Option<usize>,
}

impl Carousel {
    /// Create a carousel over `cities`; the first slide starts active
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NoCities` for an empty list.
    pub fn new(cities: Vec<City>) -> Result<Self, ApplicationError> {
        if cities.is_empty() {
            return Err(ApplicationError::NoCities);
        }
        Ok(Self {
            cities,
            active: 0,
            focused: None,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    #[must_use]
    pub const fn active(&self) -> usize {
        self.active
    }

    #[must_use]
    pub const fn focused(&self) -> Option<usize> {
        self.focused
    }

    #[must_use]
    pub fn active_city(&self) -> City {
        self.cities.get(self.active).copied().unwrap_or(City::DEFAULT)
    }

    /// Background image of the active city
    #[must_use]
    pub fn background(&self) -> &'static str {
        self.active_city().background_image()
    }

    /// Report how much of a slide is visible
    ///
    /// A slide at or above [`VISIBILITY_THRESHOLD`] becomes active. Returns
    /// the newly active index, or `None` if nothing changed.
    pub fn on_visibility(&mut self, index: usize, ratio: f64) -> Option<usize> {
        if index >= self.len() || ratio < VISIBILITY_THRESHOLD || index == self.active {
            return None;
        }
        self.active = index;
        Some(index)
    }

    /// Activate the pagination control at `index`
    ///
    /// Marks the slide active, focuses its dot and asks for a smooth scroll.
    /// Out-of-range indices are ignored.
    pub fn activate(&mut self, index: usize) -> Option<ScrollRequest> {
        if index >= self.len() {
            return None;
        }
        self.active = index;
        self.focused = Some(index);
        Some(ScrollRequest {
            index,
            smooth: true,
        })
    }

    /// Handle a key press
    ///
    /// Arrows move the active slide with wraparound. Tab on the last dot and
    /// Shift+Tab on the first dot wrap focus to the opposite end; other tab
    /// presses follow the normal order. Tab keys are only handled while a dot
    /// has focus.
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        let count = self.len();
        let last = count - 1;

        match key {
            Key::ArrowRight => self.navigate((self.active + 1) % count),
            Key::ArrowLeft => self.navigate((self.active + count - 1) % count),
            Key::Tab => match self.focused {
                Some(index) if index == last => self.focus(0, true),
                Some(index) => self.focus(index + 1, false),
                None => KeyOutcome::Ignored,
            },
            Key::ShiftTab => match self.focused {
                Some(0) => self.focus(last, true),
                Some(index) => self.focus(index - 1, false),
                None => KeyOutcome::Ignored,
            },
            Key::Other => KeyOutcome::Ignored,
        }
    }

    /// Drop dot focus, e.g. when focus leaves the pagination
    pub fn blur(&mut self) {
        self.focused = None;
    }

    fn navigate(&mut self, index: usize) -> KeyOutcome {
        self.activate(index)
            .map_or(KeyOutcome::Ignored, KeyOutcome::Navigate)
    }

    fn focus(&mut self, index: usize, default_prevented: bool) -> KeyOutcome {
        self.focused = Some(index);
        KeyOutcome::Focus {
            index,
            default_prevented,
        }
    }

    /// Pagination controls in slide order; exactly one is active
    #[must_use]
    pub fn pagination(&self) -> Vec<PaginationDot> {
        self.cities
            .iter()
            .enumerate()
            .map(|(index, city)| PaginationDot {
                index,
                label: format!("Go to {city} weather slide"),
                active: index == self.active,
                focused: self.focused == Some(index),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel() -> Carousel {
        Carousel::new(City::ALL.to_vec()).unwrap()
    }

    fn active_dots(carousel: &Carousel) -> Vec<usize> {
        carousel
            .pagination()
            .into_iter()
            .filter(|dot| dot.active)
            .map(|dot| dot.index)
            .collect()
    }

    #[test]
    fn empty_city_list_is_rejected() {
        assert!(matches!(
            Carousel::new(Vec::new()),
            Err(ApplicationError::NoCities)
        ));
    }

    #[test]
    fn first_slide_starts_active() {
        let carousel = carousel();
        assert_eq!(carousel.active(), 0);
        assert_eq!(active_dots(&carousel), [0]);
        assert_eq!(carousel.background(), "./img/london.webp");
    }

    #[test]
    fn activating_index_two_scrolls_and_marks_it_active() {
        let mut carousel = carousel();

        let request = carousel.activate(2).unwrap();

        assert_eq!(request, ScrollRequest { index: 2, smooth: true });
        assert_eq!(carousel.active(), 2);
        assert_eq!(carousel.focused(), Some(2));
        assert_eq!(active_dots(&carousel), [2]);
        assert_eq!(carousel.background(), "./img/bangkok.jpg");
    }

    #[test]
    fn activate_out_of_range_is_ignored() {
        let mut carousel = carousel();
        assert!(carousel.activate(5).is_none());
        assert_eq!(carousel.active(), 0);
    }

    #[test]
    fn forward_arrow_wraps_from_last_to_first() {
        let mut carousel = carousel();
        carousel.activate(4);

        let outcome = carousel.handle_key(Key::ArrowRight);

        assert_eq!(
            outcome,
            KeyOutcome::Navigate(ScrollRequest { index: 0, smooth: true })
        );
        assert_eq!(active_dots(&carousel), [0]);
        assert_eq!(carousel.focused(), Some(0));
    }

    #[test]
    fn back_arrow_wraps_from_first_to_last() {
        let mut carousel = carousel();

        let outcome = carousel.handle_key(Key::ArrowLeft);

        assert_eq!(
            outcome,
            KeyOutcome::Navigate(ScrollRequest { index: 4, smooth: true })
        );
        assert_eq!(carousel.active_city(), City::Nairobi);
    }

    #[test]
    fn arrows_step_one_slide() {
        let mut carousel = carousel();
        carousel.handle_key(Key::ArrowRight);
        carousel.handle_key(Key::ArrowRight);
        carousel.handle_key(Key::ArrowLeft);
        assert_eq!(carousel.active(), 1);
    }

    #[test]
    fn tab_on_last_dot_wraps_to_first() {
        let mut carousel = carousel();
        carousel.activate(4);

        assert_eq!(
            carousel.handle_key(Key::Tab),
            KeyOutcome::Focus { index: 0, default_prevented: true }
        );
        // focus moves, the active slide does not
        assert_eq!(carousel.active(), 4);
    }

    #[test]
    fn shift_tab_on_first_dot_wraps_to_last() {
        let mut carousel = carousel();
        carousel.activate(0);

        assert_eq!(
            carousel.handle_key(Key::ShiftTab),
            KeyOutcome::Focus { index: 4, default_prevented: true }
        );
    }

    #[test]
    fn inner_tabs_follow_normal_order() {
        let mut carousel = carousel();
        carousel.activate(1);

        assert_eq!(
            carousel.handle_key(Key::Tab),
            KeyOutcome::Focus { index: 2, default_prevented: false }
        );
        assert_eq!(
            carousel.handle_key(Key::ShiftTab),
            KeyOutcome::Focus { index: 1, default_prevented: false }
        );
    }

    #[test]
    fn tab_without_dot_focus_is_ignored() {
        let mut carousel = carousel();
        assert_eq!(carousel.handle_key(Key::Tab), KeyOutcome::Ignored);

        carousel.activate(3);
        carousel.blur();
        assert_eq!(carousel.handle_key(Key::ShiftTab), KeyOutcome::Ignored);
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut carousel = carousel();
        assert_eq!(carousel.handle_key(Key::Other), KeyOutcome::Ignored);
        assert_eq!(carousel.active(), 0);
    }

    #[test]
    fn visibility_threshold_is_half() {
        let mut carousel = carousel();

        assert_eq!(carousel.on_visibility(3, 0.49), None);
        assert_eq!(carousel.active(), 0);

        assert_eq!(carousel.on_visibility(3, 0.5), Some(3));
        assert_eq!(active_dots(&carousel), [3]);
        assert_eq!(carousel.background(), "./img/los-angeles.webp");

        assert_eq!(carousel.on_visibility(3, 1.0), None);
        assert_eq!(carousel.on_visibility(9, 1.0), None);
    }

    #[test]
    fn dots_carry_accessible_labels() {
        let labels: Vec<_> = carousel().pagination().into_iter().map(|d| d.label).collect();
        assert_eq!(labels[0], "Go to London weather slide");
        assert_eq!(labels[3], "Go to Los Angeles weather slide");
    }

    #[test]
    fn single_slide_wraps_onto_itself() {
        let mut carousel = Carousel::new(vec![City::Milan]).unwrap();
        carousel.activate(0);

        assert_eq!(
            carousel.handle_key(Key::ArrowRight),
            KeyOutcome::Navigate(ScrollRequest { index: 0, smooth: true })
        );
        assert_eq!(
            carousel.handle_key(Key::Tab),
            KeyOutcome::Focus { index: 0, default_prevented: true }
        );
    }
}
