//! Chat request handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use tracing::debug;

use crate::AppState;
use crate::error::AppResult;
use crate::models::{ChatRequest, ChatResponse};

/// Timestamp layout: local time, second precision, no offset.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// `POST /api/chat` — answer a message with a focus tip.
pub async fn chat_handler(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<Json<ChatResponse>> {
    let Json(request) = body?;
    let message = request.message.unwrap_or_default();
    let profile = request.profile.unwrap_or_default();

    // Simulated processing time.
    if !state.config.response_delay.is_zero() {
        tokio::time::sleep(state.config.response_delay).await;
    }

    let selection = state.selector.select(&message, &profile);
    debug!(
        source = ?selection.source,
        message_len = message.len(),
        "chat response selected"
    );

    Ok(Json(ChatResponse {
        message: selection.text,
        timestamp: chrono::Local::now().format(TIMESTAMP_FORMAT).to_string(),
    }))
}
