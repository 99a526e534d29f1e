use std::time::Duration;

use repo_onboard::chat::{ChatClient, ChatMessage};
use repo_onboard::config::LlmConfig;
use repo_onboard::error::LlmError;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ChatClient {
    ChatClient::new(LlmConfig {
        api_key: "test-key".to_string(),
        base_url: server.uri(),
        model: "test-model".to_string(),
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

#[tokio::test]
async fn extracts_the_first_choice_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "gen-1",
            "model": "test-model",
            "choices": [
                {
                    "message": { "role": "assistant", "content": "Here is the overview." },
                    "finish_reason": "stop"
                },
                {
                    "message": { "role": "assistant", "content": "ignored second choice" },
                    "finish_reason": "stop"
                }
            ]
        })))
        .mount(&server)
        .await;

    let reply = client_for(&server)
        .complete(vec![ChatMessage::user("hello")])
        .await
        .unwrap();
    assert_eq!(reply, "Here is the overview.");
}

#[tokio::test]
async fn non_success_status_maps_to_a_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream broke"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .complete(vec![ChatMessage::user("hello")])
        .await
        .unwrap_err();
    match err {
        LlmError::Provider(detail) => assert!(detail.contains("upstream broke")),
        other => panic!("expected a provider error, got {other:?}"),
    }
}

#[tokio::test]
async fn unauthorized_maps_to_an_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .complete(vec![ChatMessage::user("hello")])
        .await
        .unwrap_err();
    assert!(matches!(err, LlmError::Authentication(_)));
}

#[tokio::test]
async fn empty_choices_is_an_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "choices": [] })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .complete(vec![ChatMessage::user("hello")])
        .await
        .unwrap_err();
    assert!(matches!(err, LlmError::InvalidResponse(_)));
}

#[tokio::test]
async fn malformed_body_is_an_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .complete(vec![ChatMessage::user("hello")])
        .await
        .unwrap_err();
    assert!(matches!(err, LlmError::InvalidResponse(_)));
}
