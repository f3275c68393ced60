//! Clock port
//!
//! The forecast aggregation needs "now" in a concrete time zone to decide
//! which calendar day is today.

use chrono::{DateTime, FixedOffset};
#[cfg(test)]
use mockall::automock;

/// Source of the current wall-clock time
#[cfg_attr(test, automock)]
pub trait ClockPort: Send + Sync {
    /// Current instant, expressed in the zone used for day bucketing
    fn now(&self) -> DateTime<FixedOffset>;
}
