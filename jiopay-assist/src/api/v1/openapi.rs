use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::dto;
use super::handlers;
use super::response;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "JioPay Assist API",
        version = "1.0.0",
        description = "Support-chat proxy for JioPay. Forwards questions to the answering backend and serves the help-article knowledge base.",
    ),
    paths(
        handlers::chat::chat,
        handlers::health::health_check,
        handlers::search::search,
    ),
    components(schemas(
        // Response envelope
        response::ErrorCode,
        response::ApiError,
        // Chat
        dto::chat::ChatRequest,
        dto::chat::ChatTurn,
        models::ChatMessage,
        models::Role,
        models::Source,
        // Search
        dto::search::SearchRequest,
        dto::search::SearchResponse,
        models::Document,
        // Health (handler-local types)
        handlers::health::HealthData,
        handlers::health::BackendStatus,
        handlers::health::KnowledgeBaseStatus,
    )),
    tags(
        (name = "chat", description = "Question answering through the support backend"),
        (name = "health", description = "Health check"),
        (name = "search", description = "Keyword relevance search over help articles"),
    ),
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
