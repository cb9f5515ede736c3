//! End-to-end tests against the real router, with an in-memory database and
//! a temporary storage root.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde_json::{Value, json};
use sqlx::sqlite::SqlitePoolOptions;
use std::collections::HashSet;
use std::time::Duration;
use tempfile::TempDir;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tower::ServiceExt;

use translation_backend::app::create_app;
use translation_backend::config::settings::AppConfig;
use translation_backend::infrastructure::db::pool::init_schema;
use translation_backend::infrastructure::storage::local::LocalStorage;
use translation_backend::state::AppState;

async fn test_app() -> (Router, TempDir) {
    let dir = tempfile::tempdir().unwrap();

    // Single connection so every handler sees the same :memory: database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    init_schema(&pool).await.unwrap();

    let config = AppConfig {
        server_port: 0,
        database_url: "sqlite::memory:".to_string(),
        storage_root: dir.path().to_string_lossy().into_owned(),
    };
    let storage = LocalStorage::new(dir.path(), "videos");

    (create_app(AppState::new(config, pool, storage)), dir)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn upload_body(filename: &str, contents: &[u8], target: &str) -> Value {
    json!({
        "filename": filename,
        "file_data": STANDARD.encode(contents),
        "target_language": target,
    })
}

fn parsed_timestamp(job: &Value, field: &str) -> OffsetDateTime {
    OffsetDateTime::parse(job[field].as_str().unwrap(), &Rfc3339).unwrap()
}

#[tokio::test]
async fn healthcheck_reports_ok_with_timestamp() {
    let (app, _dir) = test_app().await;

    let (status, body) = send(&app, get_request("/api/v1/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    OffsetDateTime::parse(body["timestamp"].as_str().unwrap(), &Rfc3339).unwrap();
}

#[tokio::test]
async fn languages_are_complete_and_sorted() {
    let (app, _dir) = test_app().await;

    let (status, body) = send(&app, get_request("/api/v1/languages")).await;
    assert_eq!(status, StatusCode::OK);

    let languages = body["data"].as_array().unwrap();
    assert_eq!(languages.len(), 12);

    let names: Vec<&str> = languages
        .iter()
        .map(|l| l["name"].as_str().unwrap())
        .collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);

    let codes: HashSet<&str> = languages
        .iter()
        .map(|l| l["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes.len(), 12);
    assert!(codes.contains("es"));
}

#[tokio::test]
async fn upload_translate_complete_scenario() {
    let (app, _dir) = test_app().await;

    // Upload creates a pending job referencing the stored file.
    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/v1/videos/upload",
            upload_body("clip.mp4", b"fake video bytes", "es"),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let job = &body["data"];
    let id = job["id"].as_i64().unwrap();
    assert_eq!(job["status"], "pending");
    assert_eq!(job["original_filename"], "clip.mp4");
    assert_eq!(job["target_language"], "es");
    assert!(job["detected_language"].is_null());
    assert!(
        job["original_file_path"]
            .as_str()
            .unwrap()
            .starts_with("videos/")
    );
    assert_eq!(
        parsed_timestamp(job, "created_at"),
        parsed_timestamp(job, "updated_at")
    );

    // Pipeline marks it processing.
    tokio::time::sleep(Duration::from_millis(5)).await;
    let (status, _) = send(
        &app,
        json_request(
            "PATCH",
            &format!("/api/v1/jobs/{id}"),
            json!({"status": "processing"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, get_request(&format!("/api/v1/jobs/{id}"))).await;
    let job = &body["data"];
    assert_eq!(job["status"], "processing");
    assert!(parsed_timestamp(job, "updated_at") > parsed_timestamp(job, "created_at"));

    // Pipeline finishes with artifacts.
    let (status, _) = send(
        &app,
        json_request(
            "PATCH",
            &format!("/api/v1/jobs/{id}"),
            json!({
                "status": "completed",
                "translated_file_path": "/out/clip_es.mp4",
                "transcript": "Hi",
                "translated_transcript": "Hola",
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, get_request(&format!("/api/v1/jobs/{id}"))).await;
    let job = &body["data"];
    assert_eq!(job["status"], "completed");
    assert_eq!(job["translated_file_path"], "/out/clip_es.mp4");
    assert_eq!(job["transcript"], "Hi");
    assert_eq!(job["translated_transcript"], "Hola");
}

#[tokio::test]
async fn failed_job_carries_error_message_only() {
    let (app, _dir) = test_app().await;

    let (_, body) = send(
        &app,
        json_request(
            "POST",
            "/api/v1/videos/upload",
            upload_body("clip.mp4", b"bytes", "fr"),
        ),
    )
    .await;
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, _) = send(
        &app,
        json_request(
            "PATCH",
            &format!("/api/v1/jobs/{id}"),
            json!({"status": "failed", "error_message": "unsupported codec"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, get_request(&format!("/api/v1/jobs/{id}"))).await;
    let job = &body["data"];
    assert_eq!(job["status"], "failed");
    assert_eq!(job["error_message"], "unsupported codec");
    assert!(job["transcript"].is_null());
    assert!(job["translated_transcript"].is_null());
    assert!(job["translated_file_path"].is_null());
    assert!(job["detected_language"].is_null());
}

#[tokio::test]
async fn explicit_null_clears_field_through_the_api() {
    let (app, _dir) = test_app().await;

    let (_, body) = send(
        &app,
        json_request(
            "POST",
            "/api/v1/jobs",
            json!({
                "original_filename": "clip.mp4",
                "original_file_path": "videos/existing.mp4",
                "target_language": "de",
            }),
        ),
    )
    .await;
    let id = body["data"]["id"].as_i64().unwrap();

    send(
        &app,
        json_request(
            "PATCH",
            &format!("/api/v1/jobs/{id}"),
            json!({"detected_language": "en", "transcript": "Hi"}),
        ),
    )
    .await;

    let (status, _) = send(
        &app,
        json_request(
            "PATCH",
            &format!("/api/v1/jobs/{id}"),
            json!({"transcript": null}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, get_request(&format!("/api/v1/jobs/{id}"))).await;
    assert!(body["data"]["transcript"].is_null());
    assert_eq!(body["data"]["detected_language"], "en");
}

#[tokio::test]
async fn missing_job_yields_not_found_and_no_write() {
    let (app, _dir) = test_app().await;

    let (status, body) = send(&app, get_request("/api/v1/jobs/42")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");

    let (status, _) = send(
        &app,
        json_request("PATCH", "/api/v1/jobs/42", json!({"status": "completed"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, get_request("/api/v1/jobs")).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn validation_failures_are_bad_requests() {
    let (app, _dir) = test_app().await;

    // Unsupported target language.
    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/v1/videos/upload",
            upload_body("clip.mp4", b"x", "tlh"),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");

    // Empty filename.
    let (status, _) = send(
        &app,
        json_request(
            "POST",
            "/api/v1/videos/upload",
            upload_body("", b"x", "es"),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Payload that is not base64.
    let (status, _) = send(
        &app,
        json_request(
            "POST",
            "/api/v1/videos/upload",
            json!({"filename": "clip.mp4", "file_data": "!!not base64!!", "target_language": "es"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Direct job creation with an empty path.
    let (status, _) = send(
        &app,
        json_request(
            "POST",
            "/api/v1/jobs",
            json!({
                "original_filename": "clip.mp4",
                "original_file_path": "",
                "target_language": "es",
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Unsupported detected_language on update.
    let (_, body) = send(
        &app,
        json_request(
            "POST",
            "/api/v1/jobs",
            json!({
                "original_filename": "clip.mp4",
                "original_file_path": "videos/x.mp4",
                "target_language": "es",
            }),
        ),
    )
    .await;
    let id = body["data"]["id"].as_i64().unwrap();
    let (status, _) = send(
        &app,
        json_request(
            "PATCH",
            &format!("/api/v1/jobs/{id}"),
            json!({"detected_language": "tlh"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_returns_newest_first() {
    let (app, _dir) = test_app().await;

    let mut ids = Vec::new();
    for i in 0..4 {
        let (_, body) = send(
            &app,
            json_request(
                "POST",
                "/api/v1/jobs",
                json!({
                    "original_filename": format!("clip_{i}.mp4"),
                    "original_file_path": format!("videos/clip_{i}.mp4"),
                    "target_language": "ja",
                }),
            ),
        )
        .await;
        ids.push(body["data"]["id"].as_i64().unwrap());
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let (status, body) = send(&app, get_request("/api/v1/jobs")).await;
    assert_eq!(status, StatusCode::OK);

    let listed: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|j| j["id"].as_i64().unwrap())
        .collect();
    ids.reverse();
    assert_eq!(listed, ids);
}

#[tokio::test]
async fn concurrent_uploads_of_same_filename_stay_distinct() {
    let (app, _dir) = test_app().await;

    let mut handles = Vec::new();
    for _ in 0..6 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            let (status, body) = send(
                &app,
                json_request(
                    "POST",
                    "/api/v1/videos/upload",
                    upload_body("clip.mp4", b"same bytes", "ko"),
                ),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
            (
                body["data"]["id"].as_i64().unwrap(),
                body["data"]["original_file_path"]
                    .as_str()
                    .unwrap()
                    .to_string(),
            )
        }));
    }

    let mut ids = HashSet::new();
    let mut paths = HashSet::new();
    for handle in handles {
        let (id, path) = handle.await.unwrap();
        ids.insert(id);
        paths.insert(path);
    }
    assert_eq!(ids.len(), 6);
    assert_eq!(paths.len(), 6);
}

#[tokio::test]
async fn uploaded_bytes_land_on_disk_verbatim() {
    let (app, dir) = test_app().await;

    let (_, body) = send(
        &app,
        json_request(
            "POST",
            "/api/v1/videos/upload",
            upload_body("clip.mp4", b"exact payload", "pt"),
        ),
    )
    .await;

    let path = body["data"]["original_file_path"].as_str().unwrap();
    let on_disk = std::fs::read(dir.path().join(path)).unwrap();
    assert_eq!(on_disk, b"exact payload");
}
