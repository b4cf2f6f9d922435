mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use jiopay_assist::api::{create_router, AppState};
use jiopay_assist::config::{Config, EmbeddingsConfig, ServerConfig};
use jiopay_assist::models::FALLBACK_MESSAGE;

use common::{backend_config, backend_reply};

fn app_for(base_url: &str) -> axum::Router {
    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        backend: backend_config(base_url),
        embeddings: EmbeddingsConfig::default(),
    };
    create_router(AppState::new(config).unwrap())
}

fn chat_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json_of(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_chat_route_returns_flat_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(body_json(json!({ "query": "How do I pay?" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(backend_reply("Use UPI.")))
        .expect(1)
        .mount(&server)
        .await;

    let response = app_for(&server.uri())
        .oneshot(chat_request(json!({
            "messages": [
                { "role": "assistant", "content": "Hello!" },
                { "role": "user", "content": "How do I pay?" }
            ]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json_of(response).await;
    assert_eq!(json["role"], "assistant");
    assert_eq!(json["content"], "Use UPI.");
    assert_eq!(
        json["sources"],
        json!([{ "title": "T", "url": "U", "content": "" }])
    );
    assert!(json["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(json.get("data").is_none());
}

#[tokio::test]
async fn test_chat_route_upstream_failure_is_500_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let response = app_for(&server.uri())
        .oneshot(chat_request(json!({
            "messages": [{ "role": "user", "content": "test" }]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json_of(response).await;
    assert_eq!(json["role"], "assistant");
    assert_eq!(json["content"], FALLBACK_MESSAGE);
    assert!(json.get("sources").is_none());
}

#[tokio::test]
async fn test_chat_route_empty_messages_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(backend_reply("ok")))
        .expect(0)
        .mount(&server)
        .await;

    let response = app_for(&server.uri())
        .oneshot(chat_request(json!({ "messages": [] })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json_of(response).await;
    assert_eq!(json["content"], FALLBACK_MESSAGE);
}
