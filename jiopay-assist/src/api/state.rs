use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::knowledge::KnowledgeStore;
use crate::proxy::AnswerProxy;
use crate::retrieval::{KeywordMatcher, Retriever};

/// Read-only state shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub store: KnowledgeStore,
    pub retriever: Arc<dyn Retriever>,
    pub proxy: AnswerProxy,
}

impl AppState {
    /// Builds state over the built-in knowledge base.
    pub fn new(config: Config) -> Result<Self> {
        let store = KnowledgeStore::builtin();
        let proxy = AnswerProxy::new(config.backend)?;
        let retriever: Arc<dyn Retriever> = Arc::new(KeywordMatcher::new(store.clone()));

        Ok(Self {
            store,
            retriever,
            proxy,
        })
    }
}
