use axum::{Json, Router, extract::State, routing::get};
use chrono::{DateTime, Local, TimeZone, Utc};
use dayboard_core::Task;
use dayboard_core::import::{import_events, today_window};
use serde::Serialize;
use tracing::{info, warn};

use crate::routes::AppError;
use crate::state::AppState;
use crate::tokens::StoredTokens;

const NOT_AUTHENTICATED: &str = "Not authenticated with Google yet.";
const FETCH_FAILED: &str = "Failed to fetch calendar events";

pub fn router() -> Router<AppState> {
    Router::new().route("/calendar/tasks-today", get(tasks_today))
}

#[derive(Serialize)]
pub struct TasksResponse {
    pub tasks: Vec<Task>,
}

async fn tasks_today(State(state): State<AppState>) -> Result<Json<TasksResponse>, AppError> {
    let tokens = valid_tokens(&state).await?;

    let tasks = match state.time_zone {
        Some(tz) => fetch_today(&state, &tokens, Utc::now().with_timezone(&tz)).await?,
        None => fetch_today(&state, &tokens, Local::now()).await?,
    };

    Ok(Json(TasksResponse { tasks }))
}

/// Stored tokens, refreshed and re-saved first when they have expired.
async fn valid_tokens(state: &AppState) -> Result<StoredTokens, AppError> {
    let Some(tokens) = state.tokens.load()? else {
        return Err(AppError::unauthorized(NOT_AUTHENTICATED));
    };

    if !tokens.is_expired(Utc::now()) {
        return Ok(tokens);
    }

    if tokens.refresh_token.is_empty() {
        warn!("Google access token expired and no refresh token is stored");
        return Err(AppError::unauthorized(NOT_AUTHENTICATED));
    }

    match state.provider.refresh(&tokens).await {
        Ok(refreshed) => {
            state.tokens.save(&refreshed)?;
            info!("Refreshed Google access token");
            Ok(refreshed)
        }
        Err(e) => {
            warn!(error = %format!("{:#}", e), "Failed to refresh Google access token");
            Err(AppError::unauthorized(NOT_AUTHENTICATED))
        }
    }
}

async fn fetch_today<Tz>(
    state: &AppState,
    tokens: &StoredTokens,
    now: DateTime<Tz>,
) -> Result<Vec<Task>, AppError>
where
    Tz: TimeZone + Send + Sync,
    Tz::Offset: Send + Sync,
{
    let window = today_window(&now);
    let tz = now.timezone();

    let events = state
        .provider
        .list_events(tokens, window)
        .await
        .map_err(|e| AppError::internal(e, FETCH_FAILED))?;

    Ok(import_events(&events, &tz))
}
