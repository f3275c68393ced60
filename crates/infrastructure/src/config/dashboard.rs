//! Carousel configuration

use domain::{City, Timezone};
use serde::{Deserialize, Serialize};

/// Which cities the carousel shows and how "today" is decided
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Slides, in carousel order
    #[serde(default = "default_cities")]
    pub cities: Vec<City>,

    /// IANA zone for day bucketing; unset uses the system local time
    #[serde(default)]
    pub timezone: Option<Timezone>,
}

fn default_cities() -> Vec<City> {
    City::ALL.to_vec()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            cities: default_cities(),
            timezone: None,
        }
    }
}
