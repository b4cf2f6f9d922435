//! OpenAI-compatible text-embedding client.
//!
//! Neither the keyword matcher nor the answer proxy calls it.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::EmbeddingsConfig;
use crate::error::{AssistError, Result};

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: [&'a str; 1],
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

/// Replace literal `\n` escape sequences (backslash followed by `n`) with spaces.
///
/// Real newline characters are left alone.
pub fn normalize_input(text: &str) -> String {
    text.replace("\\n", " ")
}

#[derive(Clone)]
pub struct EmbeddingApiClient {
    client: Client,
    config: EmbeddingsConfig,
}

impl EmbeddingApiClient {
    pub fn new(config: EmbeddingsConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AssistError::Embedding(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!("{}/embeddings", self.config.base_url.trim_end_matches('/'))
    }

    /// Request the embedding of one piece of text, after escape normalization.
    ///
    /// Sends a single request. Transport failures are [`AssistError::Network`],
    /// 429 is [`AssistError::ApiRateLimit`], 401/403 is [`AssistError::ApiAuth`],
    /// and any other failure is [`AssistError::Embedding`].
    pub async fn generate_embedding(&self, value: &str) -> Result<Vec<f32>> {
        let input = normalize_input(value);
        let mut request = self.client.post(self.endpoint()).json(&EmbeddingRequest {
            model: &self.config.model,
            input: [input.as_str()],
        });
        if let Some(api_key) = &self.config.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(status_error(status, response).await);
        }

        let body: EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| AssistError::Embedding(format!("Failed to parse response: {e}")))?;

        body.data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| AssistError::Embedding("No embedding returned".to_string()))
    }
}

async fn status_error(status: StatusCode, response: reqwest::Response) -> AssistError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => AssistError::ApiRateLimit {
            retry_after: response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok()),
        },
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            AssistError::ApiAuth(response.text().await.unwrap_or_default())
        }
        _ => {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "Embedding request rejected");
            AssistError::Embedding(format!("API error {status}: {body}"))
        }
    }
}
