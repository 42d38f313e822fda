//! Image upload integration tests

use axum::http::{header::AUTHORIZATION, StatusCode};
use axum_test::multipart::{MultipartForm, Part};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::*;

const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

fn png_part() -> Part {
    Part::bytes(PNG_BYTES.to_vec())
        .file_name("cover.png")
        .mime_type("image/png")
}

async fn upload(app: &TestApp, token: Option<&str>, form: MultipartForm) -> axum_test::TestResponse {
    let mut request = app.server.put("/post-image").multipart(form);
    if let Some(token) = token {
        request = request.add_header(AUTHORIZATION, bearer(token));
    }
    request.await
}

#[tokio::test]
async fn test_upload_requires_authentication() {
    let app = TestApp::new();

    let response = upload(&app, None, MultipartForm::new().add_part("image", png_part())).await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json();
    assert_eq!(body["errors"][0]["message"], "not authenticated");
}

#[tokio::test]
async fn test_upload_stores_and_serves_image() {
    let app = TestApp::new();
    let user = app.user("ada@example.com", "Ada").await;

    let response = upload(
        &app,
        Some(&user.token),
        MultipartForm::new().add_part("image", png_part()),
    )
    .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["message"], "file stored");
    let file_path = body["filePath"].as_str().unwrap().to_string();
    assert!(file_path.starts_with("images/"));
    assert!(file_path.ends_with(".png"));

    let file_name = file_path.trim_start_matches("images/");
    let stored = std::fs::read(app.images.path().join(file_name)).unwrap();
    assert_eq!(stored, PNG_BYTES);

    let served = app.server.get(&format!("/{file_path}")).await;
    assert_eq!(served.status_code(), StatusCode::OK);
    assert_eq!(served.as_bytes().to_vec(), PNG_BYTES.to_vec());

    // The stored path is what a post references
    let post = app
        .operation(
            json!({
                "operation": "createPost",
                "variables": {
                    "postInput": { "title": "With image", "content": "Has a cover", "imageUrl": file_path }
                }
            }),
            Some(&user.token),
        )
        .await;
    let post: Value = post.json();
    assert_eq!(post["data"]["createPost"]["imageUrl"], file_path);
}

#[tokio::test]
async fn test_upload_without_image_is_not_an_error() {
    let app = TestApp::new();
    let user = app.user("ada@example.com", "Ada").await;

    let not_an_image = Part::text("hello").file_name("notes.txt").mime_type("text/plain");
    for form in [
        MultipartForm::new().add_text("oldPath", "images/missing.png"),
        MultipartForm::new().add_part("image", not_an_image),
    ] {
        let response = upload(&app, Some(&user.token), form).await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let body: Value = response.json();
        assert_eq!(body, json!({ "message": "no file" }));
    }
}

#[tokio::test]
async fn test_upload_rejects_second_image() {
    let app = TestApp::new();
    let user = app.user("ada@example.com", "Ada").await;

    let response = upload(
        &app,
        Some(&user.token),
        MultipartForm::new()
            .add_part("image", png_part())
            .add_part("image", png_part()),
    )
    .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["errors"][0]["message"], "only one image per upload");

    let leftovers = std::fs::read_dir(app.images.path()).unwrap().count();
    assert_eq!(leftovers, 0);
}

#[tokio::test]
async fn test_upload_replaces_old_image() {
    let app = TestApp::new();
    let user = app.user("ada@example.com", "Ada").await;

    let first: Value = upload(
        &app,
        Some(&user.token),
        MultipartForm::new().add_part("image", png_part()),
    )
    .await
    .json();
    let old_path = first["filePath"].as_str().unwrap().to_string();
    let old_file = app.images.path().join(old_path.trim_start_matches("images/"));
    assert!(old_file.exists());

    let second: Value = upload(
        &app,
        Some(&user.token),
        MultipartForm::new()
            .add_text("oldPath", old_path.clone())
            .add_part("image", png_part()),
    )
    .await
    .json();
    assert_ne!(second["filePath"].as_str().unwrap(), old_path);
    assert!(!old_file.exists());
}

#[tokio::test]
async fn test_deleting_post_clears_its_image() {
    let app = TestApp::new();
    let user = app.user("ada@example.com", "Ada").await;

    let uploaded: Value = upload(
        &app,
        Some(&user.token),
        MultipartForm::new().add_part("image", png_part()),
    )
    .await
    .json();
    let file_path = uploaded["filePath"].as_str().unwrap().to_string();
    let file = app.images.path().join(file_path.trim_start_matches("images/"));

    let created: Value = app
        .operation(
            json!({
                "operation": "createPost",
                "variables": {
                    "postInput": { "title": "With image", "content": "Has a cover", "imageUrl": file_path }
                }
            }),
            Some(&user.token),
        )
        .await
        .json();
    let id = created["data"]["createPost"]["_id"].as_str().unwrap().to_string();

    app.operation(
        json!({ "operation": "deletePost", "variables": { "id": id } }),
        Some(&user.token),
    )
    .await;
    assert!(!file.exists());
}
