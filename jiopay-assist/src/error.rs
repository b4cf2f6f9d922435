use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssistError {
    /// The caller broke a precondition, e.g. an empty chat history.
    #[error("Input error: {0}")]
    Input(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Upstream returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Invalid upstream response: {0}")]
    InvalidResponse(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("API rate limit exceeded, retry after {retry_after:?} seconds")]
    ApiRateLimit { retry_after: Option<u64> },

    #[error("API authentication error: {0}")]
    ApiAuth(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AssistError {
    /// Short, stable label used as a structured logging field.
    pub fn kind(&self) -> &'static str {
        match self {
            AssistError::Input(_) => "input",
            AssistError::Configuration(_) => "configuration",
            AssistError::Network(_) => "network",
            AssistError::Upstream { .. } | AssistError::InvalidResponse(_) => "upstream",
            AssistError::Validation(_) => "validation",
            AssistError::Embedding(_) => "embedding",
            AssistError::ApiRateLimit { .. } => "rate_limit",
            AssistError::ApiAuth(_) => "auth",
            AssistError::Json(_) => "json",
            AssistError::Internal(_) => "internal",
        }
    }
}

impl From<reqwest::Error> for AssistError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AssistError::InvalidResponse(err.to_string())
        } else if err.is_timeout() {
            AssistError::Network(format!("request timed out: {err}"))
        } else {
            AssistError::Network(err.to_string())
        }
    }
}

impl IntoResponse for AssistError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AssistError::Input(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AssistError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AssistError::Json(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AssistError::Configuration(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg.clone()),
            AssistError::Network(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            AssistError::Upstream { .. } => (StatusCode::BAD_GATEWAY, self.to_string()),
            AssistError::InvalidResponse(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            AssistError::Embedding(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AssistError::ApiRateLimit { .. } => (StatusCode::TOO_MANY_REQUESTS, self.to_string()),
            AssistError::ApiAuth(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AssistError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message,
            "code": status.as_u16()
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AssistError>;
