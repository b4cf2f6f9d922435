use chrono::Utc;
use nanoid::nanoid;
use serde::{Deserialize, Serialize};

use super::BackendResponse;

/// Shown to the user whenever the answering backend cannot be reached.
pub const FALLBACK_MESSAGE: &str =
    "Sorry, I'm having trouble connecting to the support system. Please try again later.";

pub const WELCOME_MESSAGE: &str =
    "Hello! I'm the JioPay support assistant. How can I help you today?";
pub const WELCOME_MESSAGE_ID: &str = "welcome-message";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A citation attached to an assistant reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Source {
    pub title: String,
    pub url: String,
    pub content: String,
}

/// One turn of a chat. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<Source>>,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: generate_message_id(),
            role,
            content: content.into(),
            sources: None,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn fallback() -> Self {
        Self::assistant(FALLBACK_MESSAGE)
    }

    pub fn welcome() -> Self {
        Self {
            id: WELCOME_MESSAGE_ID.to_string(),
            ..Self::assistant(WELCOME_MESSAGE)
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.role == Role::Assistant && self.content == FALLBACK_MESSAGE && self.sources.is_none()
    }
}

impl From<BackendResponse> for ChatMessage {
    /// Sources keep backend order and count; an absent list stays absent.
    fn from(resp: BackendResponse) -> Self {
        Self {
            sources: resp
                .sources
                .map(|sources| sources.into_iter().map(Source::from).collect()),
            ..Self::assistant(resp.response)
        }
    }
}

/// Millisecond timestamp plus a short random suffix, so two messages created
/// in the same millisecond still get distinct ids.
pub fn generate_message_id() -> String {
    format!("{}-{}", Utc::now().timestamp_millis(), nanoid!(8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BackendSource;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Role::User).unwrap(), "user");
        assert_eq!(serde_json::to_value(Role::Assistant).unwrap(), "assistant");
    }

    #[test]
    fn message_without_sources_omits_field() {
        let json = serde_json::to_value(ChatMessage::fallback()).expect("serialize");
        assert!(json.get("sources").is_none());
        assert_eq!(json["role"], "assistant");
        assert_eq!(json["content"], FALLBACK_MESSAGE);
        assert!(json["id"].is_string());
    }

    #[test]
    fn message_deserializes_without_id_sources() {
        let json = r#"{"id": "1", "role": "user", "content": "hi"}"#;
        let msg: ChatMessage = serde_json::from_str(json).expect("deserialize");
        assert_eq!(msg.role, Role::User);
        assert!(msg.sources.is_none());
    }

    #[test]
    fn backend_response_maps_sources_in_order() {
        let resp = BackendResponse {
            response: "ok".into(),
            sources: Some(vec![
                BackendSource {
                    section_title: "A".into(),
                    source_url: "/a".into(),
                    content: Some("alpha".into()),
                },
                BackendSource {
                    section_title: "B".into(),
                    source_url: "/b".into(),
                    content: None,
                },
            ]),
        };

        let msg = ChatMessage::from(resp);
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.content, "ok");
        let sources = msg.sources.expect("sources");
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].title, "A");
        assert_eq!(sources[0].content, "alpha");
        assert_eq!(sources[1].url, "/b");
        assert_eq!(sources[1].content, "");
    }

    #[test]
    fn backend_response_keeps_empty_source_list() {
        let msg = ChatMessage::from(BackendResponse {
            response: "ok".into(),
            sources: Some(Vec::new()),
        });
        assert_eq!(msg.sources, Some(Vec::new()));
    }

    #[test]
    fn generated_ids_are_distinct() {
        let a = ChatMessage::user("one");
        let b = ChatMessage::user("one");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn welcome_has_stable_id() {
        let welcome = ChatMessage::welcome();
        assert_eq!(welcome.id, WELCOME_MESSAGE_ID);
        assert_eq!(welcome.role, Role::Assistant);
        assert_eq!(welcome.content, WELCOME_MESSAGE);
    }

    #[test]
    fn fallback_is_detected() {
        assert!(ChatMessage::fallback().is_fallback());
        assert!(!ChatMessage::assistant("ok").is_fallback());
    }
}
