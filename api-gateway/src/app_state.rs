use std::sync::Arc;
use attractions_shared::{now_utc, AppConfig, Result};
use chrono::{DateTime, Utc};
use crate::attraction_service::{AttractionService, SearchDefaults};
use crate::google_maps_client::{GoogleMapsClient, PlacesProvider};

/// Application state shared by every handler. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub attractions: Arc<AttractionService>,
    pub start_time: DateTime<Utc>,
}

impl AppState {
    /// Wires the real Google Maps client.
    pub fn new(config: AppConfig) -> Result<Self> {
        let provider = Arc::new(GoogleMapsClient::new(&config.google_maps)?);
        Ok(Self::with_provider(config, provider))
    }

    pub fn with_provider(config: AppConfig, provider: Arc<dyn PlacesProvider>) -> Self {
        let defaults = SearchDefaults::from(&config.google_maps);

        Self {
            attractions: Arc::new(AttractionService::new(provider, defaults)),
            start_time: now_utc(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        (now_utc() - self.start_time).num_seconds().max(0) as u64
    }
}
