//! Wire types for the external question-answering backend.

use serde::{Deserialize, Serialize};

use super::Source;

#[derive(Debug, Clone, Serialize)]
pub struct BackendRequest<'a> {
    pub query: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendResponse {
    pub response: String,
    #[serde(default)]
    pub sources: Option<Vec<BackendSource>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendSource {
    pub section_title: String,
    pub source_url: String,
    #[serde(default)]
    pub content: Option<String>,
}

impl From<BackendSource> for Source {
    fn from(source: BackendSource) -> Self {
        Self {
            title: source.section_title,
            url: source.source_url,
            content: source.content.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_without_content_defaults_to_empty() {
        let json = r#"{"section_title": "T", "source_url": "U"}"#;
        let backend: BackendSource = serde_json::from_str(json).expect("deserialize");
        let source = Source::from(backend);
        assert_eq!(source.title, "T");
        assert_eq!(source.url, "U");
        assert_eq!(source.content, "");
    }

    #[test]
    fn response_without_sources_is_none() {
        let backend: BackendResponse =
            serde_json::from_str(r#"{"response": "ok"}"#).expect("deserialize");
        assert_eq!(backend.response, "ok");
        assert!(backend.sources.is_none());
    }

    #[test]
    fn response_with_null_content_defaults_to_empty() {
        let json = r#"{
            "response": "ok",
            "sources": [{"section_title": "T", "source_url": "U", "content": null}]
        }"#;
        let backend: BackendResponse = serde_json::from_str(json).expect("deserialize");
        let sources: Vec<Source> = backend
            .sources
            .expect("sources")
            .into_iter()
            .map(Into::into)
            .collect();
        assert_eq!(sources[0].content, "");
    }

    #[test]
    fn request_serializes_query_field() {
        let json = serde_json::to_value(BackendRequest { query: "hi" }).expect("serialize");
        assert_eq!(json, serde_json::json!({ "query": "hi" }));
    }
}
