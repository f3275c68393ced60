//! View models
//!
//! Pure functions from slide data to serializable display trees. Renderers
//! call them again whenever a slide snapshot changes; the JSON form is the
//! contract with HTML front ends.

use domain::{CurrentWeather, DailyForecasts, capitalize_words};
use serde::Serialize;

use crate::services::slide::{SlideSnapshot, SlideState};

/// Main block: icon, temperature and the day's range
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentView {
    pub temp: i32,
    pub temp_min: i32,
    pub temp_max: i32,
    pub icon_class: &'static str,
    pub glyph: &'static str,
}

/// One entry of the details list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailItem {
    pub icon: &'static str,
    pub val: String,
    pub label: &'static str,
}

/// One row of the forecast list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRow {
    pub day: String,
    pub icon_class: &'static str,
    pub glyph: &'static str,
    pub min: i32,
    pub max: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastView {
    pub title: &'static str,
    pub days: Vec<ForecastRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlideHeader {
    pub location: String,
    pub description: String,
}

/// Everything one slide displays
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SlideView {
    /// Placeholder while loading: city name, empty description
    Pending { header: SlideHeader },
    Populated {
        header: SlideHeader,
        current: CurrentView,
        details: Vec<DetailItem>,
        forecast: ForecastView,
    },
    /// The slide's content is replaced by the message
    Errored { message: String },
}

/// Message shown instead of the whole carousel when it cannot be built
pub const INIT_FAILURE_MESSAGE: &str = "Failed to initialize the application";

pub fn current_view(current: &CurrentWeather) -> CurrentView {
    let display = current.icon.display_icon();
    CurrentView {
        temp: current.temperature,
        temp_min: current.temperature_min,
        temp_max: current.temperature_max,
        icon_class: display.css_class(),
        glyph: display.glyph(),
    }
}

/// Humidity, wind and visibility, in that order
pub fn detail_items(current: &CurrentWeather) -> Vec<DetailItem> {
    vec![
        DetailItem {
            icon: "fas fa-tint",
            val: current.humidity.to_string(),
            label: "Humidity",
        },
        DetailItem {
            icon: "fas fa-wind",
            val: format!("{} m/s", current.wind_speed),
            label: "Wind",
        },
        DetailItem {
            icon: "fas fa-eye",
            val: format!("{} km", current.visibility_km),
            label: "Visibility",
        },
    ]
}

pub fn forecast_view(forecast: &DailyForecasts) -> ForecastView {
    let days = forecast
        .iter()
        .map(|summary| {
            let display = summary.icon_code.display_icon();
            ForecastRow {
                day: capitalize_words(&summary.day),
                icon_class: display.css_class(),
                glyph: display.glyph(),
                min: summary.min,
                max: summary.max,
            }
        })
        .collect();

    ForecastView {
        title: "Weekly forecast",
        days,
    }
}

pub fn slide_view(snapshot: &SlideSnapshot) -> SlideView {
    match &snapshot.state {
        SlideState::Pending => SlideView::Pending {
            header: SlideHeader {
                location: snapshot.city.name().to_string(),
                description: String::new(),
            },
        },
        SlideState::Populated(data) => SlideView::Populated {
            header: SlideHeader {
                location: data.current.location.clone(),
                description: data.current.description.clone(),
            },
            current: current_view(&data.current),
            details: detail_items(&data.current),
            forecast: forecast_view(&data.forecast),
        },
        SlideState::Errored { message } => SlideView::Errored {
            message: message.clone(),
        },
    }
}
