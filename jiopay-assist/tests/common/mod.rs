#![allow(dead_code, unused_imports)]

use serde_json::json;

use jiopay_assist::config::BackendConfig;
use jiopay_assist::proxy::AnswerProxy;

pub use serial_test::serial;

/// Backend config pointing at a mock server's `/chat` route.
pub fn backend_config(base_url: &str) -> BackendConfig {
    BackendConfig {
        chat_link: Some(format!("{base_url}/chat")),
        timeout_secs: 5,
    }
}

pub fn proxy_for(base_url: &str) -> AnswerProxy {
    AnswerProxy::new(backend_config(base_url)).expect("build proxy")
}

/// A backend reply with one source that has no `content` field.
pub fn backend_reply(response: &str) -> serde_json::Value {
    json!({
        "response": response,
        "sources": [{ "section_title": "T", "source_url": "U" }]
    })
}
