//! v1 relevance search handler.

use axum::extract::State;

use crate::api::extractors::AppJson;
use crate::api::v1::dto::{SearchRequest, SearchResponse};
use crate::api::v1::response::{ApiError, ApiResponse};
use crate::api::AppState;

/// `POST /api/v1/search`
///
/// Returns the knowledge-base articles the keyword matcher considers relevant.
/// A query with no usable words yields an empty result, not an error.
#[utoipa::path(
    post,
    path = "/api/v1/search",
    tag = "search",
    operation_id = "search.search",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Relevant articles", body = SearchResponse),
        (status = 400, description = "Invalid request", body = ApiError),
    )
)]
pub async fn search(
    State(state): State<AppState>,
    AppJson(req): AppJson<SearchRequest>,
) -> ApiResponse<SearchResponse> {
    match state.retriever.find_relevant(&req.query).await {
        Ok(results) => ApiResponse::success(SearchResponse::from(results)),
        Err(e) => ApiResponse::from(e),
    }
}
