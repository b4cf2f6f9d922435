//! Relevance search request/response DTOs.

use serde::{Deserialize, Serialize};

use crate::models::Document;

/// Request body for `POST /api/v1/search`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct SearchRequest {
    /// Free-text question. Only words longer than three characters are used.
    pub query: String,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// At most two knowledge-base articles, in knowledge-base order.
    pub results: Vec<Document>,
    pub total: u32,
}

impl From<Vec<Document>> for SearchResponse {
    fn from(results: Vec<Document>) -> Self {
        Self {
            total: results.len() as u32,
            results,
        }
    }
}
