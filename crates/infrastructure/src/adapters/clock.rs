//! System clock adapter

use application::ports::ClockPort;
use chrono::{DateTime, FixedOffset, Local, Utc};
use domain::Timezone;

/// Wall clock, optionally pinned to a configured zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    timezone: Option<Timezone>,
}

impl SystemClock {
    /// Clock in the given zone; `None` uses the system local time
    #[must_use]
    pub const fn new(timezone: Option<Timezone>) -> Self {
        Self { timezone }
    }

    #[must_use]
    pub const fn timezone(&self) -> Option<Timezone> {
        self.timezone
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        match self.timezone {
            Some(timezone) => timezone.localize(Utc::now()),
            None => Local::now().fixed_offset(),
        }
    }
}
