//! Value Objects - Immutable, identity-less domain primitives

mod city;
mod display_icon;
mod geo_location;
mod humidity;
mod icon_code;
mod timezone;

pub use city::City;
pub use display_icon::DisplayIcon;
pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use humidity::{Humidity, InvalidHumidity};
pub use icon_code::{DayPeriod, IconCode};
pub use timezone::Timezone;
