//! Chat proxy request DTOs.

use serde::Deserialize;

use crate::models::{ChatMessage, Role};

/// One turn as sent by the chat front-end. Ids and sources are not required.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

impl From<ChatTurn> for ChatMessage {
    fn from(turn: ChatTurn) -> Self {
        ChatMessage::new(turn.role, turn.content)
    }
}

/// Request body for `POST /api/chat`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct ChatRequest {
    pub messages: Vec<ChatTurn>,
}

impl ChatRequest {
    pub fn into_history(self) -> Vec<ChatMessage> {
        self.messages.into_iter().map(ChatMessage::from).collect()
    }
}
