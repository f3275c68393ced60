//! Text rendering of slide views
//!
//! Turns the view models into terminal text. Every function is pure; the
//! caller re-renders whenever a slide snapshot or the carousel changes.

use std::fmt::Write as _;

use application::{
    CurrentView, DetailItem, ForecastView, PaginationDot, SlideHeader, SlideView,
};

/// Render one slide
pub fn slide(view: &SlideView) -> String {
    match view {
        SlideView::Pending { header } => {
            let mut out = self::header(header);
            out.push_str("  Loading...\n");
            out
        },
        SlideView::Populated {
            header,
            current,
            details,
            forecast,
        } => {
            let mut out = self::header(header);
            out.push_str(&main_block(current));
            out.push_str(&detail_list(details));
            out.push_str(&forecast_list(forecast));
            out
        },
        SlideView::Errored { message } => format!("⚠️  {message}\n"),
    }
}

fn header(header: &SlideHeader) -> String {
    let mut out = format!("📍 {}\n", header.location);
    if !header.description.is_empty() {
        let _ = writeln!(out, "   {}", header.description);
    }
    out
}

fn main_block(current: &CurrentView) -> String {
    format!(
        "\n   {}  {}°   ↓ {}°  ↑ {}°\n",
        current.glyph, current.temp, current.temp_min, current.temp_max
    )
}

fn detail_list(details: &[DetailItem]) -> String {
    let mut out = String::from("\n");
    for item in details {
        let _ = writeln!(out, "   {:<11}{}", format!("{}:", item.label), item.val);
    }
    out
}

fn forecast_list(forecast: &ForecastView) -> String {
    let mut out = format!("\n   {}\n", forecast.title);
    for row in &forecast.days {
        let _ = writeln!(
            out,
            "   {:<4}{}  {:>3}° / {:>3}°",
            row.day, row.glyph, row.min, row.max
        );
    }
    out
}

/// Render the pagination row
///
/// The active slide is a filled dot, the focused dot is bracketed.
pub fn pagination(dots: &[PaginationDot]) -> String {
    dots.iter()
        .map(|dot| {
            let mark = if dot.active { "●" } else { "○" };
            if dot.focused {
                format!("[{mark}]")
            } else {
                format!(" {mark} ")
            }
        })
        .collect()
}

/// Render the active slide with its background and pagination
pub fn carousel(view: &SlideView, background: &str, dots: &[PaginationDot]) -> String {
    format!(
        "🖼  {background}\n\n{}\n{}\n",
        slide(view),
        pagination(dots)
    )
}
