//! Document retrieval for user questions.
//!
//! [`Retriever`] is the seam between callers and the retrieval strategy. The
//! only strategy today is [`KeywordMatcher`]; a vector-similarity retriever can
//! implement the same trait without touching callers.

mod keyword;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Document;

pub use keyword::{KeywordMatcher, MAX_RELEVANT_DOCUMENTS, MIN_TOKEN_CHARS};

#[async_trait]
pub trait Retriever: Send + Sync {
    /// Documents related to `query`, most relevant first.
    async fn find_relevant(&self, query: &str) -> Result<Vec<Document>>;
}
