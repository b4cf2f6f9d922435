//! Forwards chat turns to the external question-answering backend.
//!
//! [`AnswerProxy::forward`] reports each failure kind separately.
//! [`AnswerProxy::answer`] is what chat callers use: apart from an empty
//! history, every failure is logged and replaced with the fallback reply.

use reqwest::Client;
use std::time::Duration;

use crate::config::BackendConfig;
use crate::error::{AssistError, Result};
use crate::models::{BackendRequest, BackendResponse, ChatMessage};

#[derive(Clone)]
pub struct AnswerProxy {
    client: Client,
    config: BackendConfig,
}

impl AnswerProxy {
    pub fn new(config: BackendConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AssistError::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Send the latest turn of `history` to the backend.
    ///
    /// Makes at most one request and never retries.
    pub async fn forward(&self, history: &[ChatMessage]) -> Result<ChatMessage> {
        let last = history
            .last()
            .ok_or_else(|| AssistError::Input("chat history is empty".to_string()))?;

        let endpoint = self.config.chat_link.as_deref().ok_or_else(|| {
            AssistError::Configuration("answering backend endpoint is not set".to_string())
        })?;

        tracing::debug!(endpoint, history_len = history.len(), "Forwarding question");

        let response = self
            .client
            .post(endpoint)
            .json(&BackendRequest {
                query: &last.content,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AssistError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let parsed: BackendResponse = serde_json::from_slice(&bytes)
            .map_err(|e| AssistError::InvalidResponse(format!("Failed to parse response: {e}")))?;

        Ok(ChatMessage::from(parsed))
    }

    /// Like [`forward`](Self::forward), but connection, configuration and
    /// upstream failures become the fallback assistant message.
    pub async fn answer(&self, history: &[ChatMessage]) -> Result<ChatMessage> {
        match self.forward(history).await {
            Ok(message) => Ok(message),
            Err(e @ AssistError::Input(_)) => Err(e),
            Err(e) => {
                tracing::error!(error = %e, kind = e.kind(), "Failed to get answer from backend");
                Ok(ChatMessage::fallback())
            }
        }
    }
}
