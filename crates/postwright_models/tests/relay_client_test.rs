//! Tests for the relay client against an in-process mock relay.

use axum::{Json, Router, http::StatusCode, routing::post};
use postwright_error::ProviderErrorKind;
use postwright_interface::CompletionProvider;
use postwright_models::{RelayClient, RelayRequest, RelayResponse};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

async fn spawn_relay(status: StatusCode, reply: Value) -> (String, Arc<Mutex<Option<Value>>>) {
    let seen = Arc::new(Mutex::new(None));
    let seen_in_handler = seen.clone();
    let router = Router::new().route(
        "/api/generate",
        post(move |Json(body): Json<Value>| {
            let reply = reply.clone();
            let seen = seen_in_handler.clone();
            async move {
                *seen.lock().unwrap() = Some(body);
                (status, Json(reply))
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (format!("http://{}/api/generate", addr), seen)
}

#[tokio::test]
async fn test_relay_success_sends_camel_case_body() {
    let (url, seen) = spawn_relay(StatusCode::OK, json!({ "content": "Hello A" })).await;
    let client = RelayClient::new(&url).expect("client builds");

    let content = client
        .complete("Topic A", "Prompt", "sk-test")
        .await
        .expect("relay succeeds");
    assert_eq!(content, "Hello A");

    let body = seen.lock().unwrap().clone().expect("body captured");
    let request: RelayRequest = serde_json::from_value(body.clone()).expect("relay body");
    assert_eq!(request.brief, "Topic A");
    assert_eq!(request.system_prompt, "Prompt");
    assert_eq!(body["apiKey"], "sk-test");
}

#[tokio::test]
async fn test_relay_error_payload_is_surfaced() {
    let (url, _) = spawn_relay(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": "Failed to generate post: upstream timeout" }),
    )
    .await;

    let err = RelayClient::new(&url)
        .expect("client builds")
        .complete("Topic", "Prompt", "sk-test")
        .await
        .expect_err("500 fails");
    assert!(matches!(err.kind(), ProviderErrorKind::Status { status: 500, .. }));
    assert_eq!(err.user_message(), "Failed to generate post: upstream timeout");
}

#[tokio::test]
async fn test_relay_error_without_message_is_generic() {
    let (url, _) = spawn_relay(StatusCode::BAD_GATEWAY, json!({})).await;

    let err = RelayClient::new(&url)
        .expect("client builds")
        .complete("Topic", "Prompt", "sk-test")
        .await
        .expect_err("502 fails");
    assert_eq!(err.user_message(), "Failed to generate post");
}

#[tokio::test]
async fn test_relay_without_content_is_empty() {
    let (url, _) = spawn_relay(StatusCode::OK, json!({})).await;

    let err = RelayClient::new(&url)
        .expect("client builds")
        .complete("Topic", "Prompt", "sk-test")
        .await
        .expect_err("no content fails");
    assert_eq!(err.kind(), &ProviderErrorKind::EmptyContent);
}

#[tokio::test]
async fn test_relay_requires_credential() {
    let client = RelayClient::new("http://127.0.0.1:9/api/generate").expect("client builds");
    let err = client
        .complete("Topic", "Prompt", "")
        .await
        .expect_err("missing key");
    assert_eq!(err.kind(), &ProviderErrorKind::MissingCredential);
    assert_eq!(err.user_message(), "API key is required");
}

#[tokio::test]
async fn test_relay_rejects_whitespace_credential_without_sending() {
    let (url, seen) = spawn_relay(StatusCode::OK, json!({ "content": "Hello" })).await;

    let err = RelayClient::new(&url)
        .expect("client builds")
        .complete("Topic", "Prompt", " \t ")
        .await
        .expect_err("blank key");
    assert_eq!(err.kind(), &ProviderErrorKind::MissingCredential);
    assert!(seen.lock().unwrap().is_none());
}

#[tokio::test]
async fn test_relay_sends_trimmed_credential() {
    let (url, seen) = spawn_relay(StatusCode::OK, json!({ "content": "Hello" })).await;

    RelayClient::new(&url)
        .expect("client builds")
        .complete("Topic", "Prompt", "  sk-test\n")
        .await
        .expect("relay succeeds");

    let body = seen.lock().unwrap().clone().expect("body captured");
    assert_eq!(body["apiKey"], "sk-test");
}

#[test]
fn test_relay_response_shapes() {
    let ok = serde_json::to_value(RelayResponse::success("Hi")).unwrap();
    assert_eq!(ok, json!({ "content": "Hi" }));

    let failed = serde_json::to_value(RelayResponse::failure("nope")).unwrap();
    assert_eq!(failed, json!({ "error": "nope" }));
}
