//! POST /api/chat - forward a conversation to the hosted chat completion API.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::{error, info};

use electroquiz_core::{ChatRequest, ChatResponse};

use crate::http::responses::{ApiError, CHAT_FAILURE};
use crate::state::AppState;
use crate::upstream::with_system_instruction;

/// Prepend the system instruction, call the upstream, return its reply.
///
/// Every failure, including a malformed body, becomes the same generic 500.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    json_result: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let req = match json_result {
        Ok(Json(req)) => req,
        Err(rejection) => {
            error!(error = %rejection, "Invalid chat request body");
            return Err(ApiError::Processing(CHAT_FAILURE));
        }
    };

    info!(messages = req.messages.len(), "Received chat request");

    let messages = with_system_instruction(req.messages);
    match state.chat.complete(messages).await {
        Ok(content) => Ok(Json(ChatResponse { content })),
        Err(e) => {
            error!(error = %e, "Error in chat API route");
            Err(ApiError::Processing(CHAT_FAILURE))
        }
    }
}
