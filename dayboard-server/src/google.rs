//! Google Calendar, through the `google-calendar` client.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use dayboard_core::import::DayWindow;
use dayboard_core::{CalendarEvent, EventTime};
use google_calendar::Client;
use google_calendar::types::{EventDateTime, OrderBy};

use crate::config::ServerConfig;
use crate::provider::CalendarProvider;
use crate::tokens::StoredTokens;

const READONLY_SCOPE: &str = "https://www.googleapis.com/auth/calendar.readonly";

pub struct GoogleProvider {
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    calendar_id: String,
}

impl GoogleProvider {
    pub fn new(config: &ServerConfig) -> Self {
        GoogleProvider {
            client_id: config.google_client_id.clone(),
            client_secret: config.google_client_secret.clone(),
            redirect_uri: config.google_redirect_uri.clone(),
            calendar_id: config.calendar_id.clone(),
        }
    }

    fn client(&self, tokens: Option<&StoredTokens>) -> Client {
        let (access_token, refresh_token) = match tokens {
            Some(tokens) => (tokens.access_token.clone(), tokens.refresh_token.clone()),
            None => (String::new(), String::new()),
        };

        Client::new(
            self.client_id.clone(),
            self.client_secret.clone(),
            self.redirect_uri.clone(),
            access_token,
            refresh_token,
        )
    }
}

fn expires_at(expires_in: i64) -> Option<chrono::DateTime<Utc>> {
    if expires_in > 0 {
        Some(Utc::now() + Duration::seconds(expires_in))
    } else {
        None
    }
}

fn event_time(time: &Option<EventDateTime>) -> Option<EventTime> {
    let time = time.as_ref()?;
    if let Some(dt) = time.date_time {
        Some(EventTime::DateTime(dt))
    } else {
        time.date.map(EventTime::Date)
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

#[async_trait]
impl CalendarProvider for GoogleProvider {
    fn authorization_url(&self) -> String {
        let scopes = vec![READONLY_SCOPE.to_string()];
        // Force the consent screen so Google always hands back a refresh token
        format!("{}&prompt=consent", self.client(None).user_consent_url(&scopes))
    }

    async fn exchange_code(&self, code: &str, state: &str) -> Result<StoredTokens> {
        let mut client = self.client(None);

        let access_token = client
            .get_access_token(code, state)
            .await
            .context("Failed to exchange authorization code")?;

        Ok(StoredTokens {
            expires_at: expires_at(access_token.expires_in),
            access_token: access_token.access_token,
            refresh_token: access_token.refresh_token,
        })
    }

    async fn refresh(&self, tokens: &StoredTokens) -> Result<StoredTokens> {
        let access_token = self
            .client(Some(tokens))
            .refresh_access_token()
            .await
            .context("Failed to refresh token")?;

        // Google usually omits the refresh token on refresh
        let refresh_token = if access_token.refresh_token.is_empty() {
            tokens.refresh_token.clone()
        } else {
            access_token.refresh_token
        };

        Ok(StoredTokens {
            expires_at: expires_at(access_token.expires_in),
            access_token: access_token.access_token,
            refresh_token,
        })
    }

    async fn list_events(&self, tokens: &StoredTokens, window: DayWindow) -> Result<Vec<CalendarEvent>> {
        let time_min = window.start.to_rfc3339();
        let time_max = window.end.to_rfc3339();

        let response = self
            .client(Some(tokens))
            .events()
            .list_all(
                &self.calendar_id,
                "",
                0,
                OrderBy::StartTime,
                &[],
                "",
                &[],
                false,
                false,
                true, // expand recurring events into instances
                &time_max,
                &time_min,
                "",
                "",
            )
            .await
            .context("Failed to fetch events")?;

        let mut events = Vec::new();

        for event in response.body {
            if event.status == "cancelled" {
                continue;
            }

            let (Some(start), Some(end)) = (event_time(&event.start), event_time(&event.end)) else {
                continue;
            };

            events.push(CalendarEvent {
                id: non_empty(event.id),
                summary: non_empty(event.summary),
                start,
                end,
            });
        }

        Ok(events)
    }
}
