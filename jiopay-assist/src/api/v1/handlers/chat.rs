//! Chat proxy handler, mounted at `POST /api/chat`.
//!
//! Answers with a flat chat message rather than the v1 envelope, matching what
//! the chat front-end expects. Any failure, including an unreadable body or an
//! empty history, becomes HTTP 500 with the fallback message.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::api::v1::dto::ChatRequest;
use crate::api::AppState;
use crate::error::AssistError;
use crate::models::ChatMessage;

#[utoipa::path(
    post,
    path = "/api/chat",
    tag = "chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Answer from the support backend", body = ChatMessage),
        (status = 500, description = "Fallback apology message", body = ChatMessage),
    )
)]
pub async fn chat(State(state): State<AppState>, body: Bytes) -> Response {
    let result = match serde_json::from_slice::<ChatRequest>(&body) {
        Ok(req) => state.proxy.forward(&req.into_history()).await,
        Err(e) => Err(AssistError::from(e)),
    };

    match result {
        Ok(message) => (StatusCode::OK, Json(message)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, kind = e.kind(), "Chat request failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ChatMessage::fallback())).into_response()
        }
    }
}
