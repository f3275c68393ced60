//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod clock_port;
mod weather_port;

#[cfg(test)]
pub use clock_port::MockClockPort;
pub use clock_port::ClockPort;
#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::WeatherPort;
