//! In-memory chat history for a single client.

use crate::error::Result;
use crate::models::ChatMessage;
use crate::proxy::AnswerProxy;

/// Owns the history of one conversation and sends each turn through an
/// [`AnswerProxy`].
pub struct ChatSession {
    proxy: AnswerProxy,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    /// Starts with the assistant's welcome message.
    pub fn new(proxy: AnswerProxy) -> Self {
        Self {
            proxy,
            messages: vec![ChatMessage::welcome()],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Submit a user question and wait for the reply.
    ///
    /// Blank input is ignored and returns `Ok(None)`. Otherwise the input is
    /// stored and sent as typed, and the assistant reply (possibly the
    /// fallback) is appended after it.
    pub async fn submit(&mut self, input: &str) -> Result<Option<ChatMessage>> {
        if input.trim().is_empty() {
            return Ok(None);
        }

        self.messages.push(ChatMessage::user(input));
        let reply = self.proxy.answer(&self.messages).await?;
        self.messages.push(reply.clone());

        Ok(Some(reply))
    }
}
