//! Google OAuth: consent URL and the redirect callback.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::state::AppState;

pub const CONNECTED_MESSAGE: &str =
    "Google Calendar connected. You can close this tab and return to the app.";
const MISSING_CODE: &str = "Missing code";
const AUTHORIZE_FAILED: &str = "Failed to authorize Google.";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/google/auth-url", get(auth_url))
        .route("/google/callback", get(callback))
}

#[derive(Serialize)]
pub struct AuthUrlResponse {
    pub url: String,
}

async fn auth_url(State(state): State<AppState>) -> Json<AuthUrlResponse> {
    Json(AuthUrlResponse {
        url: state.provider.authorization_url(),
    })
}

#[derive(Deserialize)]
pub struct CallbackQuery {
    code: Option<String>,
    state: Option<String>,
}

/// Plain-text responses, this page is shown in the user's browser tab.
async fn callback(
    State(state): State<AppState>,
    Query(query): Query<CallbackQuery>,
) -> Result<&'static str, (StatusCode, &'static str)> {
    let Some(code) = query.code.filter(|code| !code.is_empty()) else {
        return Err((StatusCode::BAD_REQUEST, MISSING_CODE));
    };

    let tokens = state
        .provider
        .exchange_code(&code, query.state.as_deref().unwrap_or_default())
        .await
        .map_err(|e| {
            error!(error = %format!("{:#}", e), "Google token exchange failed");
            (StatusCode::INTERNAL_SERVER_ERROR, AUTHORIZE_FAILED)
        })?;

    state.tokens.save(&tokens).map_err(|e| {
        error!(error = %format!("{:#}", e), "Failed to store Google tokens");
        (StatusCode::INTERNAL_SERVER_ERROR, AUTHORIZE_FAILED)
    })?;

    info!(path = %state.tokens.path().display(), "Google Calendar connected");
    Ok(CONNECTED_MESSAGE)
}
