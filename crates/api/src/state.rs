use std::sync::Arc;

use sprintboard_airtable::AirtableClient;
use sprintboard_core::calendar::WeekCalendar;

use crate::config::ServerConfig;

/// Shared application state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<AirtableClient>,
    pub calendar: Arc<WeekCalendar>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: AirtableClient, config: ServerConfig) -> Self {
        let calendar = WeekCalendar::new(config.planning_year);
        Self {
            store: Arc::new(store),
            calendar: Arc::new(calendar),
            config: Arc::new(config),
        }
    }
}
