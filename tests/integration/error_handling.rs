//! Status-code policy and error classification

use crate::integration::mock_server::{unreachable_client, MockBackend};
use kamirecruit_client::{Error, StatusPolicy};
use serde_json::json;

#[tokio::test]
async fn strict_policy_turns_non_2xx_into_remote_error() {
    let mut backend = MockBackend::new().await;
    let _mock = backend
        .mock_json(
            "POST",
            "/api/upload-resume",
            400,
            r#"{"detail": "Only PDF files allowed"}"#,
        )
        .await;

    let err = backend
        .client()
        .upload_resume(kamirecruit_client::ResumeFile::new("cv.pdf", b"x".to_vec()))
        .await
        .unwrap_err();

    match err {
        Error::Remote {
            status,
            message,
            body,
        } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Only PDF files allowed");
            assert_eq!(body, json!({"detail": "Only PDF files allowed"}));
        }
        other => panic!("expected remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn lenient_policy_parses_error_bodies_as_success() {
    let mut backend = MockBackend::new().await;
    let _mock = backend
        .mock_json("GET", "/api/health", 500, r#"{"status": "degraded"}"#)
        .await;

    let snapshot = backend
        .client_with_policy(StatusPolicy::Lenient)
        .health()
        .await
        .unwrap();
    assert_eq!(snapshot.status(), Some("degraded"));
}

#[tokio::test]
async fn strict_policy_without_json_body_uses_reason_phrase() {
    let mut backend = MockBackend::new().await;
    let _mock = backend
        .server
        .mock("GET", "/api/health")
        .with_status(503)
        .with_body("upstream unavailable")
        .create_async()
        .await;

    let err = backend.client().health().await.unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert!(err.to_string().contains("Service Unavailable"));
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let err = unreachable_client().get("/api/health").await.unwrap_err();
    assert!(err.is_transport());
    assert!(err.status().is_none());
}
