//! Application services - Use case implementations

mod carousel;
mod dashboard_service;
mod slide;
pub mod views;

pub use carousel::{Carousel, Key, KeyOutcome, PaginationDot, ScrollRequest, VISIBILITY_THRESHOLD};
pub use dashboard_service::{Dashboard, DashboardService};
pub use slide::{SlideData, SlideSnapshot, SlideState};
pub use views::{
    CurrentView, DetailItem, ForecastRow, ForecastView, INIT_FAILURE_MESSAGE, SlideHeader,
    SlideView, current_view, detail_items, forecast_view, slide_view,
};
