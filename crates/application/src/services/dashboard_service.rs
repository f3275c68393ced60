//! Dashboard service
//!
//! Builds one slide per city and loads each one in its own task. A task
//! resolves the city first, then fetches current weather and the forecast
//! together and waits for both. Any missing piece errors the slide; sibling
//! slides are unaffected.

use std::{collections::HashMap, fmt, sync::Arc};

use domain::{City, aggregate_daily};
use tokio::{
    sync::watch,
    task::{self, JoinSet},
};
use tracing::{debug, error, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{ClockPort, WeatherPort},
    services::slide::{SlideData, SlideSnapshot, SlideState},
};

/// Loads slide data through the weather port
#[derive(Clone)]
pub struct DashboardService {
    weather: Arc<dyn WeatherPort>,
    clock: Arc<dyn ClockPort>,
}

impl fmt::Debug for DashboardService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashboardService").finish_non_exhaustive()
    }
}

impl DashboardService {
    /// Create a new dashboard service
    pub fn new(weather: Arc<dyn WeatherPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { weather, clock }
    }

    /// Load one city and return the terminal state of its slide
    #[instrument(skip(self), fields(city = %city))]
    pub async fn load_slide(&self, city: City) -> SlideState {
        match self.load_data(city).await {
            Some(data) => {
                debug!(days = data.forecast.len(), "Slide populated");
                SlideState::Populated(Box::new(data))
            },
            None => SlideState::errored(city),
        }
    }

    /// Load a single city looked up by name, case-insensitively
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Domain` if the name is not a carousel city.
    pub async fn load_named(&self, name: &str) -> Result<SlideSnapshot, ApplicationError> {
        let city: City = name.parse()?;
        let state = self.load_slide(city).await;
        Ok(SlideSnapshot {
            index: 0,
            city,
            state,
        })
    }

    async fn load_data(&self, city: City) -> Option<SlideData> {
        let Some(resolved) = self.weather.resolve_city(city.name()).await else {
            warn!("Geo resolution returned no location");
            return None;
        };

        let (current, samples) = tokio::join!(
            self.weather.current_weather(&resolved),
            self.weather.forecast(&resolved.location),
        );

        let Some(current) = current else {
            warn!(location = %resolved.name, "Current weather missing");
            return None;
        };
        let Some(samples) = samples else {
            warn!(location = %resolved.name, "Forecast missing");
            return None;
        };

        let forecast = aggregate_daily(&samples, &self.clock.now());
        Some(SlideData { current, forecast })
    }

    /// Create the slides and start loading every city
    ///
    /// Must be called from within a tokio runtime. Loading is unordered
    /// across cities; observe progress through the returned [`Dashboard`].
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NoCities` for an empty city list.
    #[instrument(skip(self, cities), fields(count = cities.len()))]
    pub fn start(&self, cities: &[City]) -> Result<Dashboard, ApplicationError> {
        if cities.is_empty() {
            return Err(ApplicationError::NoCities);
        }

        let mut slides = Vec::with_capacity(cities.len());
        let mut senders = Vec::with_capacity(cities.len());
        let mut owners = HashMap::with_capacity(cities.len());
        let mut tasks = JoinSet::new();

        for (index, &city) in cities.iter().enumerate() {
            let (sender, receiver) = watch::channel(SlideSnapshot::pending(index, city));
            let sender = Arc::new(sender);
            slides.push(receiver);
            senders.push(Arc::clone(&sender));

            let service = self.clone();
            let handle = tasks.spawn(async move {
                let state = service.load_slide(city).await;
                sender.send_modify(|snapshot| {
                    snapshot.settle(state);
                });
                index
            });
            owners.insert(handle.id(), index);
        }

        info!(slides = slides.len(), "Dashboard started");
        Ok(Dashboard {
            slides,
            senders,
            owners,
            tasks,
        })
    }
}

/// Live view over the slides of a started dashboard
///
/// Each slide is written by its own loader task. The handle writes a slide
/// only when that task dies without settling it.
#[derive(Debug)]
pub struct Dashboard {
    slides: Vec<watch::Receiver<SlideSnapshot>>,
    senders: Vec<Arc<watch::Sender<SlideSnapshot>>>,
    owners: HashMap<task::Id, usize>,
    tasks: JoinSet<usize>,
}

impl Dashboard {
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Cities in slide order
    #[must_use]
    pub fn cities(&self) -> Vec<City> {
        self.slides.iter().map(|slide| slide.borrow().city).collect()
    }

    /// Current state of one slide
    #[must_use]
    pub fn snapshot(&self, index: usize) -> Option<SlideSnapshot> {
        self.slides.get(index).map(|slide| slide.borrow().clone())
    }

    /// Current state of every slide, in slide order
    #[must_use]
    pub fn snapshots(&self) -> Vec<SlideSnapshot> {
        self.slides.iter().map(|slide| slide.borrow().clone()).collect()
    }

    /// Receiver that is notified when the slide at `index` settles
    #[must_use]
    pub fn subscribe(&self, index: usize) -> Option<watch::Receiver<SlideSnapshot>> {
        self.slides.get(index).cloned()
    }

    /// Whether every slide has reached a terminal state
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.slides.iter().all(|slide| slide.borrow().state.is_terminal())
    }

    /// Wait for the next loader task to finish and return its slide index
    ///
    /// A task that panicked or was cancelled leaves its slide errored.
    /// Returns `None` once every task has finished.
    pub async fn next_settled(&mut self) -> Option<usize> {
        while let Some(result) = self.tasks.join_next().await {
            match result {
                Ok(index) => return Some(index),
                Err(e) => {
                    let Some(index) = self.owners.get(&e.id()).copied() else {
                        error!(error = %e, "Unknown slide loader task failed");
                        continue;
                    };
                    error!(error = %e, index, "Slide loader task failed");
                    if let Some(sender) = self.senders.get(index) {
                        sender.send_modify(|snapshot| {
                            let city = snapshot.city;
                            snapshot.settle(SlideState::errored(city));
                        });
                    }
                    return Some(index);
                },
            }
        }
        None
    }

    /// Wait until every loader task has finished
    pub async fn wait(&mut self) -> Vec<SlideSnapshot> {
        while self.next_settled().await.is_some() {}
        self.snapshots()
    }
}
