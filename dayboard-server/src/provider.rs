use anyhow::Result;
use async_trait::async_trait;
use dayboard_core::CalendarEvent;
use dayboard_core::import::DayWindow;

use crate::tokens::StoredTokens;

/// A calendar service the server can authorize against and read from.
#[async_trait]
pub trait CalendarProvider: Send + Sync {
    /// Consent page the user is sent to.
    fn authorization_url(&self) -> String;

    /// Trade the callback's authorization code for tokens.
    async fn exchange_code(&self, code: &str, state: &str) -> Result<StoredTokens>;

    async fn refresh(&self, tokens: &StoredTokens) -> Result<StoredTokens>;

    /// Single-instance events inside `window`, ordered by start time.
    async fn list_events(&self, tokens: &StoredTokens, window: DayWindow) -> Result<Vec<CalendarEvent>>;
}
