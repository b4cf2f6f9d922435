use async_trait::async_trait;

use crate::error::Result;
use crate::knowledge::KnowledgeStore;
use crate::models::Document;

use super::Retriever;

/// Upper bound on documents returned per query.
pub const MAX_RELEVANT_DOCUMENTS: usize = 2;
/// Tokens must be strictly longer than this many characters to count.
pub const MIN_TOKEN_CHARS: usize = 3;

/// Substring keyword matcher over a [`KnowledgeStore`].
///
/// A document matches when any query token longer than three characters is
/// contained in its lower-cased title or body. Containment is substring based,
/// so "count" matches "discount". There is no scoring: the first matches in
/// store order win.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    store: KnowledgeStore,
}

impl KeywordMatcher {
    pub fn new(store: KnowledgeStore) -> Self {
        Self { store }
    }

    pub fn find(&self, query: &str) -> Vec<Document> {
        let tokens = significant_tokens(query);
        if tokens.is_empty() {
            return Vec::new();
        }

        self.store
            .documents()
            .iter()
            .filter(|doc| {
                let title = doc.title.to_lowercase();
                let content = doc.content.to_lowercase();
                tokens
                    .iter()
                    .any(|token| title.contains(token.as_str()) || content.contains(token.as_str()))
            })
            .take(MAX_RELEVANT_DOCUMENTS)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl Retriever for KeywordMatcher {
    async fn find_relevant(&self, query: &str) -> Result<Vec<Document>> {
        let results = self.find(query);
        tracing::debug!(query_len = query.len(), matches = results.len(), "Keyword match");
        Ok(results)
    }
}

fn significant_tokens(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .filter(|token| token.chars().count() > MIN_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}
