use brandkit::{
    AspectRatio, AssetSaver, AssetTask, BatchDriver, BrandkitError, GeminiConfig, ImageClient,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL_PATH: &str = "/models/gemini-3-pro-image-preview:generateContent";

fn client_for(server: &MockServer) -> ImageClient {
    let config = GeminiConfig::new("it-key").with_base_url(format!("{}/models", server.uri()));
    ImageClient::new(config).unwrap()
}

#[tokio::test]
async fn generated_image_is_written_byte_for_byte() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(query_param("key", "it-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [
                { "inlineData": { "mimeType": "image/png", "data": "AAAA" } }
            ]}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let client = client_for(&server);
    let driver = BatchDriver::new(&client, AssetSaver::new().with_root(dir.path()));

    let outcomes = driver
        .run(&[AssetTask::new("x", AspectRatio::Square, "out/a.png")])
        .await;

    assert!(outcomes[0].is_success());
    let bytes = std::fs::read(dir.path().join("out/a.png")).unwrap();
    assert_eq!(bytes, vec![0u8, 0, 0]);
}

#[tokio::test]
async fn error_status_leaves_no_file_and_later_tasks_still_run() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(body_partial_json(json!({ "contents": [{ "parts": [{ "text": "refused" }] }] })))
        .respond_with(ResponseTemplate::new(400).set_body_string("{\"error\":\"bad prompt\"}"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(body_partial_json(json!({ "contents": [{ "parts": [{ "text": "fine" }] }] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [
                { "inlineData": { "mimeType": "image/png", "data": "iVBORw==" } }
            ]}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let client = client_for(&server);
    let driver = BatchDriver::new(&client, AssetSaver::new().with_root(dir.path()));

    let outcomes = driver
        .run(&[
            AssetTask::new("refused", AspectRatio::Wide16x9, "assets/images/hero.png"),
            AssetTask::new("fine", AspectRatio::Square, "assets/images/icon.png"),
        ])
        .await;

    match &outcomes[0].result {
        Err(BrandkitError::HttpStatus { status, body }) => {
            assert_eq!(*status, 400);
            assert!(body.contains("bad prompt"));
        }
        other => panic!("expected HttpStatus, got {:?}", other),
    }
    assert!(!dir.path().join("assets/images/hero.png").exists());

    assert!(outcomes[1].is_success());
    assert_eq!(
        std::fs::read(dir.path().join("assets/images/icon.png")).unwrap(),
        vec![0x89, b'P', b'N', b'G']
    );
}

#[tokio::test]
async fn missing_image_part_is_reported_not_saved() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "only words" }] } }]
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let client = client_for(&server);
    let driver = BatchDriver::new(&client, AssetSaver::new().with_root(dir.path()));

    let outcomes = driver
        .run(&[AssetTask::new("x", AspectRatio::Square, "out/none.png")])
        .await;

    let err = outcomes[0].result.as_ref().unwrap_err();
    assert!(err.is_no_image_data());
    assert!(!dir.path().join("out").exists());
}
