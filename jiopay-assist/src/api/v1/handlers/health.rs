use axum::extract::State;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::v1::response::ApiResponse;

/// Health data returned inside the v1 envelope.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthData {
    pub status: String,
    pub version: String,
    pub backend: BackendStatus,
    pub knowledge_base: KnowledgeBaseStatus,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BackendStatus {
    /// Whether an answering-backend endpoint is set. Chat requests fall back
    /// to the apology message while this is `false`.
    pub configured: bool,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct KnowledgeBaseStatus {
    pub documents: usize,
}

/// `GET /api/v1/health`
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "health",
    responses(
        (status = 200, description = "Service health status", body = HealthData),
    )
)]
pub async fn health_check(State(state): State<AppState>) -> ApiResponse<HealthData> {
    let backend = state.proxy.config();

    ApiResponse::success(HealthData {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        backend: BackendStatus {
            configured: backend.is_configured(),
            timeout_secs: backend.timeout_secs,
        },
        knowledge_base: KnowledgeBaseStatus {
            documents: state.store.len(),
        },
    })
}
