//! End-to-end tests for the consultation form and JSON API.
//!
//! The router is driven in-process with a mock chat client so every test can
//! assert exactly how many LLM calls a submission produced.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use expert_consult::connector::api::{Container, ContainerConfig};
use expert_consult::connector::web::create_router;
use expert_consult::domain::{CAREER_INSTRUCTION, EMPTY_INPUT_WARNING};
use expert_consult::{ChatRole, Credential, CredentialSource, MockChatClient};

fn container(client: Arc<MockChatClient>, credential: Credential) -> Arc<Container> {
    Arc::new(Container::with_chat_client(
        credential,
        client,
        ContainerConfig::default(),
    ))
}

fn configured() -> Credential {
    Credential::new("sk-test", CredentialSource::Environment)
}

async fn post_form(container: Arc<Container>, pairs: &[(&str, &str)]) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri("/consult")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(serde_urlencoded::to_string(pairs).unwrap()))
        .unwrap();

    send(container, request).await
}

async fn send(container: Arc<Container>, request: Request<Body>) -> (StatusCode, String) {
    let response = create_router(container).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_index_renders_form_with_success_banner() {
    let client = Arc::new(MockChatClient::new());
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();

    let (status, page) = send(container(client.clone(), configured()), request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("キャリアの専門家"));
    assert!(page.contains("ワークライフバランスの専門家"));
    assert!(page.contains("LLMに相談する"));
    assert!(page.contains("✅ OpenAI APIキーが正常に読み込まれています。"));
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn test_career_consultation_reaches_model_once() {
    let client = Arc::new(MockChatClient::with_reply("まずは強みを整理しましょう。"));

    let (status, page) = post_form(
        container(client.clone(), configured()),
        &[
            ("expert", "キャリアの専門家"),
            ("content", "転職すべきか悩んでいます"),
        ],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("🔍 回答："));
    assert!(page.contains("まずは強みを整理しましょう。"));

    let calls = client.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0][0].role(), ChatRole::System);
    assert!(calls[0][0].content().contains("キャリア相談の専門家"));
    assert_eq!(calls[0][0].content(), CAREER_INSTRUCTION);
    assert_eq!(calls[0][1].role(), ChatRole::User);
    assert_eq!(calls[0][1].content(), "転職すべきか悩んでいます");
}

#[tokio::test]
async fn test_empty_content_shows_warning_without_call() {
    let client = Arc::new(MockChatClient::new());

    let (status, page) = post_form(
        container(client.clone(), configured()),
        &[("expert", "ワークライフバランスの専門家"), ("content", "")],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(page.contains(EMPTY_INPUT_WARNING));
    assert!(!page.contains("🔍 回答："));
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn test_missing_credential_never_calls_model() {
    let client = Arc::new(MockChatClient::new());
    let container = container(client.clone(), Credential::empty());

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (_, page) = send(container.clone(), request).await;
    assert!(page.contains("banner error"));
    assert!(page.contains("OPENAI_API_KEY"));

    let (status, page) = post_form(
        container,
        &[("expert", "キャリアの専門家"), ("content", "相談があります")],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("id=\"error\""));
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn test_llm_failure_keeps_form_usable() {
    let client = Arc::new(MockChatClient::failing("API returned 429 Too Many Requests"));
    let container = container(client.clone(), configured());

    for _ in 0..2 {
        let (status, page) = post_form(
            container.clone(),
            &[("expert", "キャリアの専門家"), ("content", "相談があります")],
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(page.contains("429 Too Many Requests"));
        assert!(page.contains("LLMに相談する"));
    }

    assert_eq!(client.call_count(), 2);
}

#[tokio::test]
async fn test_json_api_returns_tagged_state() {
    let client = Arc::new(MockChatClient::with_reply("睡眠時間を確保しましょう。"));
    let request = Request::builder()
        .method("POST")
        .uri("/api/consult")
        .header("content-type", "application/json")
        .body(Body::from(
            r#"{"expert":"ワークライフバランスの専門家","content":"残業が多いです"}"#,
        ))
        .unwrap();

    let (status, body) = send(container(client.clone(), configured()), request).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "answer");
    assert_eq!(json["text"], "睡眠時間を確保しましょう。");
    assert_eq!(client.call_count(), 1);
}

#[tokio::test]
async fn test_json_api_whitespace_content_is_validation_warning() {
    let client = Arc::new(MockChatClient::new());
    let request = Request::builder()
        .method("POST")
        .uri("/api/consult")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"expert":"キャリアの専門家","content":"  \n "}"#))
        .unwrap();

    let (_, body) = send(container(client.clone(), configured()), request).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();

    assert_eq!(json["status"], "validation_warning");
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn test_status_endpoint_reports_source() {
    let client = Arc::new(MockChatClient::new());
    let request = Request::builder()
        .uri("/api/status")
        .body(Body::empty())
        .unwrap();

    let (_, body) = send(container(client, Credential::empty()), request).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();

    assert_eq!(json["configured"], false);
    assert_eq!(json["source"], "missing");
    assert_eq!(json["model"], "mock-chat");
}
