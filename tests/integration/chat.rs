//! Chat wrapper and the chat view against a mock backend.

use crate::integration::mock_server::{unreachable_client, MockBackend};
use kamirecruit_client::types::NO_REPLY_PLACEHOLDER;
use kamirecruit_client::views::{ChatView, Phase, UNREACHABLE_REPLY};
use kamirecruit_client::ChatMessage;
use mockito::Matcher;
use serde_json::json;

#[tokio::test]
async fn chat_with_ai_returns_reply() {
    let mut backend = MockBackend::new().await;
    let mock = backend
        .server
        .mock("POST", "/api/chat")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"message": "hello"})))
        .with_status(200)
        .with_body(r#"{"reply": "hi"}"#)
        .expect(1)
        .create_async()
        .await;

    let reply = backend.client().chat_with_ai("hello").await.unwrap();
    assert_eq!(reply.text(), "hi");
    mock.assert_async().await;
}

#[tokio::test]
async fn chat_with_ai_missing_reply_yields_placeholder() {
    let mut backend = MockBackend::new().await;
    let _mock = backend.mock_json("POST", "/api/chat", 200, "{}").await;

    let reply = backend.client().chat_with_ai("hello").await.unwrap();
    assert_eq!(reply.text(), NO_REPLY_PLACEHOLDER);
}

#[tokio::test]
async fn sequential_sends_keep_order() {
    let mut backend = MockBackend::new().await;
    let _a = backend
        .server
        .mock("POST", "/api/chat")
        .match_body(Matcher::Json(json!({"message": "A"})))
        .with_status(200)
        .with_body(r#"{"reply": "reply1"}"#)
        .create_async()
        .await;
    let _b = backend
        .server
        .mock("POST", "/api/chat")
        .match_body(Matcher::Json(json!({"message": "B"})))
        .with_status(200)
        .with_body(r#"{"reply": "reply2"}"#)
        .create_async()
        .await;

    let mut view = ChatView::new(backend.client());
    view.send_message("A").await;
    view.send_message("B").await;

    assert_eq!(
        view.messages(),
        [
            ChatMessage::you("A"),
            ChatMessage::ai("reply1"),
            ChatMessage::you("B"),
            ChatMessage::ai("reply2"),
        ]
    );
    assert_eq!(view.phase(), &Phase::Success);
    assert_eq!(view.input(), "");
}

#[tokio::test]
async fn blank_input_issues_no_request() {
    let mut backend = MockBackend::new().await;
    let mock = backend
        .server
        .mock("POST", "/api/chat")
        .expect(0)
        .create_async()
        .await;

    let mut view = ChatView::new(backend.client());
    view.send_message("   ").await;

    assert!(view.messages().is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn unreachable_server_becomes_error_line() {
    let mut view = ChatView::new(unreachable_client());
    view.send_message("hello").await;

    assert_eq!(
        view.messages(),
        [ChatMessage::you("hello"), ChatMessage::ai(UNREACHABLE_REPLY)]
    );
    assert!(matches!(view.phase(), Phase::Failure(_)));
}

#[tokio::test]
async fn server_error_becomes_error_line_under_strict_policy() {
    let mut backend = MockBackend::new().await;
    let _mock = backend
        .mock_json(
            "POST",
            "/api/chat",
            500,
            r#"{"detail": "Candidate agent not initialized. Check GEMINI_API_KEY env var."}"#,
        )
        .await;

    let mut view = ChatView::new(backend.client());
    view.send_message("hello").await;
    assert_eq!(view.messages()[1], ChatMessage::ai(UNREACHABLE_REPLY));
}
