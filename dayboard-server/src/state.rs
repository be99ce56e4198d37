use std::sync::Arc;

use anyhow::Result;
use chrono_tz::Tz;

use crate::config::ServerConfig;
use crate::google::GoogleProvider;
use crate::provider::CalendarProvider;
use crate::tokens::TokenStore;

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn CalendarProvider>,
    pub tokens: TokenStore,
    /// Zone that defines "today"; `None` uses the system's local time
    pub time_zone: Option<Tz>,
}

impl AppState {
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        Ok(AppState {
            provider: Arc::new(GoogleProvider::new(config)),
            tokens: TokenStore::new(config.token_path()?),
            time_zone: config.time_zone()?,
        })
    }
}
