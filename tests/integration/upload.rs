//! Multipart resume upload and the upload view.

use crate::integration::mock_server::{unreachable_client, MockBackend};
use kamirecruit_client::views::{
    Phase, UploadView, STATUS_DONE, STATUS_FAILED, STATUS_NO_FILE,
};
use kamirecruit_client::{ApiClient, ResumeFile};
use mockito::Matcher;

fn resume() -> ResumeFile {
    ResumeFile::new("jane_doe.pdf", b"%PDF-1.4 fake resume".to_vec())
}

#[tokio::test]
async fn upload_uses_library_multipart_content_type() {
    let mut backend = MockBackend::new().await;
    let mock = backend
        .server
        .mock("POST", "/api/upload-resume")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=.+$".into()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="file"; filename="jane_doe.pdf""#.into()),
            Matcher::Regex("Content-Type: application/pdf".into()),
            Matcher::Regex("%PDF-1.4 fake resume".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"skills": ["python", "sql"]}"#)
        .expect(1)
        .create_async()
        .await;

    let resp = backend.client().upload_resume(resume()).await.unwrap();
    assert_eq!(resp.skills(), ["python", "sql"]);
    mock.assert_async().await;
}

#[tokio::test]
async fn view_fills_skills_in_order() {
    let mut backend = MockBackend::new().await;
    let _mock = backend
        .mock_json("POST", "/api/upload-resume", 200, r#"{"skills": ["python", "sql"]}"#)
        .await;

    let mut view = UploadView::new(backend.client());
    view.select_file(Some(resume()));
    view.submit().await;

    assert_eq!(view.skills(), ["python", "sql"]);
    assert_eq!(view.status(), STATUS_DONE);
    assert_eq!(view.phase(), &Phase::Success);
}

#[tokio::test]
async fn missing_skills_field_means_empty_list() {
    let mut backend = MockBackend::new().await;
    let _mock = backend
        .mock_json("POST", "/api/upload-resume", 200, "{}")
        .await;

    let mut view = UploadView::new(backend.client());
    view.select_file(Some(resume()));
    view.submit().await;

    assert!(view.skills().is_empty());
    assert_eq!(view.status(), STATUS_DONE);
}

#[tokio::test]
async fn legacy_upload_route_is_configurable() {
    let mut backend = MockBackend::new().await;
    let mock = backend
        .mock_json("POST", "/process_resume", 200, r#"{"skills": ["excel"]}"#)
        .await;

    let client = ApiClient::builder()
        .base_url(&backend.base_url)
        .upload_path("/process_resume")
        .build()
        .unwrap();
    let resp = client.upload_resume(resume()).await.unwrap();
    assert_eq!(resp.into_skills(), vec!["excel"]);
    mock.assert_async().await;
}

#[tokio::test]
async fn no_file_selected_issues_no_request() {
    let mut backend = MockBackend::new().await;
    let mock = backend
        .server
        .mock("POST", "/api/upload-resume")
        .expect(0)
        .create_async()
        .await;

    let mut view = UploadView::new(backend.client());
    view.submit().await;

    assert_eq!(view.status(), STATUS_NO_FILE);
    mock.assert_async().await;
}

#[tokio::test]
async fn unreachable_server_sets_failure_status() {
    let mut view = UploadView::new(unreachable_client());
    view.select_file(Some(resume()));
    view.submit().await;

    assert_eq!(view.status(), STATUS_FAILED);
    assert!(view.skills().is_empty());
    assert!(matches!(view.phase(), Phase::Failure(_)));
}

#[tokio::test]
async fn one_bad_skill_entry_keeps_the_rest() {
    let mut backend = MockBackend::new().await;
    let mock = backend
        .mock_json(
            "POST",
            "/api/upload-resume",
            200,
            r#"{"skills": ["python", {"name": "go"}, "sql"]}"#,
        )
        .await;

    let resp = backend
        .client()
        .upload_resume(ResumeFile::new("cv.pdf", b"%PDF-1.4".to_vec()))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(resp.skills(), ["python", "sql"]);
}
